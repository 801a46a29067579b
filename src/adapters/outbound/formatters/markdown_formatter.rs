use super::html_formatter::display_scalar;
use crate::application::dto::TableSnapshot;
use crate::dashboard::domain::{
    is_truthy, Column, ColumnSchema, PackageRecord, TableRow, FIELD_CPAN, FIELD_CPAN_VERSION,
};
use crate::ports::outbound::TableFormatter;
use crate::shared::Result;

/// Leading header cells shared by every schema
const FIXED_HEADERS: [&str; 3] = ["Distribution", "Version", "Updates"];

/// MarkdownFormatter adapter rendering the rows shown by default as a
/// Markdown table
///
/// Hidden version rows are left out: a static table cannot swap them in.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Backslash-escapes inline Markdown syntax in free text
    fn escape_markdown_inline(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '#' | '|' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\n' | '\r' => escaped.push(' '),
                _ => escaped.push(c),
            }
        }
        escaped
    }

    /// Wraps text in a code span whose fence outlasts any backtick run inside
    fn code_span(text: &str) -> String {
        let text = text.replace(['\n', '\r'], " ");
        let longest_run = text
            .split(|c: char| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run + 1);
        let padding = if text.starts_with('`') || text.ends_with('`') {
            " "
        } else {
            ""
        };
        format!("{fence}{padding}{text}{padding}{fence}")
    }

    /// Header labels, one per table column
    fn header_labels(schema: &ColumnSchema) -> Vec<String> {
        let mut labels: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
        for column in schema.columns() {
            match column {
                Column::Flat { key } => labels.push(key.clone()),
                Column::RuntimeVersion { key, platforms } => {
                    labels.extend(platforms.iter().map(|p| format!("{} {}", key, p)));
                }
            }
        }
        labels
    }

    fn render_updates(record: &PackageRecord) -> String {
        let indexed = record.get(FIELD_CPAN).is_some_and(is_truthy);
        match record.get(FIELD_CPAN_VERSION).filter(|v| is_truthy(v)) {
            Some(latest) => format!("⬆ {}", display_scalar(latest)),
            None if indexed => "✓".to_string(),
            None => String::new(),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableFormatter for MarkdownFormatter {
    fn format_head(&self, schema: &ColumnSchema) -> String {
        let labels = Self::header_labels(schema);
        let header: Vec<String> = labels
            .iter()
            .map(|label| Self::escape_markdown_table_cell(label))
            .collect();
        let separator: Vec<String> = labels
            .iter()
            .map(|label| "-".repeat(label.chars().count().max(3)))
            .collect();

        format!("| {} |\n|{}|\n", header.join(" | "), separator.join("|"))
    }

    fn format_row(&self, row: &TableRow, record: &PackageRecord, schema: &ColumnSchema) -> String {
        if !row.visible {
            return String::new();
        }

        let mut cells = vec![
            Self::escape_markdown_table_cell(row.package.name()),
            Self::escape_markdown_table_cell(row.package.version()),
            Self::escape_markdown_table_cell(&Self::render_updates(record)),
        ];
        cells.extend(
            schema
                .status_cells(record)
                .into_iter()
                .map(|present| if present { "+" } else { "-" }.to_string()),
        );

        format!("| {} |\n", cells.join(" | "))
    }

    fn format_document(&self, snapshot: &TableSnapshot) -> Result<String> {
        let mut output = String::from("# Pakket Status\n\n");

        if let Some(version) = &snapshot.version {
            output.push_str(&format!(
                "Pakket version: **{}**\n\n",
                Self::escape_markdown_inline(version)
            ));
        }
        if let Some(location) = &snapshot.location {
            output.push_str(&format!("Filter: {}\n\n", Self::code_span(location)));
        }

        if snapshot.is_empty() {
            output.push_str("_No package inventory available._\n\n");
        } else {
            output.push_str(&snapshot.head);
            output.push_str(&snapshot.body);
            output.push('\n');
        }

        output.push_str(&format!(
            "Showing {} of {} package(s). Rendered at {}\n",
            snapshot.visible_rows,
            snapshot.total_packages,
            snapshot.rendered_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        Ok(output)
    }
}
