use crate::application::dto::TableSnapshot;
use crate::dashboard::domain::{
    is_truthy, sanitize_identifier, Column, ColumnSchema, PackageRecord, TableRow, FIELD_CPAN,
    FIELD_CPAN_VERSION,
};
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;

const CSS_CLASS_BAD: &str = "bad";
const CSS_CLASS_FINE: &str = "ok";
const CSS_CLASS_MISSING: &str = "missing";
const CSS_CLASS_OUTDATED: &str = "outdated";
const CSS_CLASS_LATEST: &str = "latest";
const CSS_CLASS_NOT_LATEST: &str = "not-latest";

const METACPAN_RELEASE_URL: &str = "https://metacpan.org/release";
const METACPAN_API_RELEASE_URL: &str = "https://fastapi.metacpan.org/release";
const METACPAN_ICON: &str = "/image/metacpan-icon.png";
const UPDATES_PATH: &str = "/updates";

/// HtmlFormatter adapter rendering the status table as HTML
///
/// Every non-latest version gets its own row, hidden by default, so a page
/// script can swap rows when a version is picked in the selector.
pub struct HtmlFormatter {
    /// Base URL of the metadata repository package names link into
    source_link_base: Option<String>,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self {
            source_link_base: None,
        }
    }

    /// Links each package name to `<base>/<name>.yaml`
    pub fn with_source_link_base(base: impl Into<String>) -> Self {
        Self {
            source_link_base: Some(base.into().trim_end_matches('/').to_string()),
        }
    }

    fn render_name(&self, name: &str) -> String {
        let escaped = escape_html(name);
        match &self.source_link_base {
            Some(base) => format!(
                "<a target=\"_blank\" title=\"{name}\" href=\"{base}/{name}.yaml\">{name}</a>",
                name = escaped,
                base = escape_html(base)
            ),
            None => escaped,
        }
    }

    fn render_version(row: &TableRow) -> String {
        let versions = row.group.versions();
        if row.group.has_single_version() {
            return escape_html(&versions[0]);
        }

        let options: String = versions
            .iter()
            .map(|version| {
                let selected = if version == row.package.version() {
                    " selected"
                } else {
                    ""
                };
                format!(
                    "<option value=\"{v}\"{selected}>{v}</option>",
                    v = escape_html(version),
                    selected = selected
                )
            })
            .collect();
        format!(
            "<select data-name=\"{}\">{}</select>",
            escape_html(&sanitize_identifier(row.package.name())),
            options
        )
    }

    fn render_updates(row: &TableRow, record: &PackageRecord) -> String {
        let release = escape_html(row.package.release_name());
        let cpan_version = record
            .get(FIELD_CPAN_VERSION)
            .filter(|v| is_truthy(v))
            .map(display_scalar);
        let class = if cpan_version.is_some() {
            CSS_CLASS_OUTDATED
        } else {
            "none"
        };

        let icon = if record.get(FIELD_CPAN).is_some_and(is_truthy) {
            format!(
                "<a target=\"_blank\" title=\"{r}\" href=\"{url}/{r}\"><img src=\"{icon}\"></a>",
                r = release,
                url = METACPAN_RELEASE_URL,
                icon = METACPAN_ICON
            )
        } else {
            String::new()
        };

        format!(
            "<td class=\"{}\">{} <a target=\"_blank\" href=\"{}/{}\">{}</a></td>",
            class,
            icon,
            METACPAN_API_RELEASE_URL,
            release,
            escape_html(&cpan_version.unwrap_or_default())
        )
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for HtmlFormatter {
    fn format_head(&self, schema: &ColumnSchema) -> String {
        let mut head = String::from("<tr>");
        head.push_str("<td class=\"name\" rowspan=\"2\" colspan=\"2\">Distribution</td>");
        head.push_str(&format!(
            "<td class=\"cpan\" rowspan=\"2\" colspan=\"1\"><a target=\"_blank\" href=\"{}\">Updates</a></td>",
            UPDATES_PATH
        ));

        for column in schema.columns() {
            let (colspan, rowspan) = match column {
                Column::RuntimeVersion { platforms, .. } => (platforms.len(), 1),
                Column::Flat { .. } => (1, 2),
            };
            head.push_str(&format!(
                "<td colspan=\"{}\" rowspan=\"{}\">{}</td>",
                colspan,
                rowspan,
                escape_html(column.key())
            ));
        }

        head.push_str("</tr><tr>");
        for column in schema.columns() {
            if let Column::RuntimeVersion { platforms, .. } = column {
                for platform in platforms {
                    head.push_str(&format!("<td>{}</td>", escape_html(platform)));
                }
            }
        }
        head.push_str("</tr>");
        head
    }

    fn format_row(&self, row: &TableRow, record: &PackageRecord, schema: &ColumnSchema) -> String {
        let cells = schema.status_cells(record);
        let problematic = cells.iter().any(|present| !present);

        let mut markup = format!(
            "<td class=\"name\">{}</td><td class=\"version\">{}</td>{}",
            self.render_name(row.package.name()),
            Self::render_version(row),
            Self::render_updates(row, record)
        );
        for present in cells {
            if present {
                markup.push_str("<td>+</td>");
            } else {
                markup.push_str(&format!("<td class=\"{}\">-</td>", CSS_CLASS_MISSING));
            }
        }

        format!(
            "<tr{} id=\"{}\" class=\"{} {}\">{}</tr>\n",
            if row.visible {
                ""
            } else {
                " style=\"display: none;\""
            },
            escape_html(&row.row_key()),
            if problematic {
                CSS_CLASS_BAD
            } else {
                CSS_CLASS_FINE
            },
            if row.is_latest {
                CSS_CLASS_LATEST
            } else {
                CSS_CLASS_NOT_LATEST
            },
            markup
        )
    }

    fn format_document(&self, snapshot: &TableSnapshot) -> Result<String> {
        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        output.push_str("<title>Pakket status</title>\n</head>\n<body>\n");

        if let Some(version) = &snapshot.version {
            output.push_str(&format!(
                "<p class=\"pakket-uwsgi-version\">Pakket version: <span id=\"pakket-uwsgi-version\">{}</span></p>\n",
                escape_html(version)
            ));
        }
        if let Some(location) = &snapshot.location {
            output.push_str(&format!(
                "<p class=\"location\"><a href=\"{0}\">{0}</a></p>\n",
                escape_html(location)
            ));
        }

        output.push_str("<table>\n<thead id=\"thead\">");
        output.push_str(&snapshot.head);
        output.push_str("</thead>\n<tbody id=\"tbody\">\n");
        output.push_str(&snapshot.body);
        output.push_str("</tbody>\n</table>\n");

        output.push_str(&format!(
            "<footer>Showing {} of {} package(s). Rendered at {}</footer>\n",
            snapshot.visible_rows,
            snapshot.total_packages,
            snapshot.rendered_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str("</body>\n</html>\n");
        Ok(output)
    }
}

/// Escapes the five HTML special characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Display form of a scalar field; strings lose their JSON quotes
pub(crate) fn display_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
