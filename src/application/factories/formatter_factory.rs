use crate::adapters::outbound::formatters::{HtmlFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TableFormatter;

/// Factory for creating table formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `source_link_base` - Metadata repository package names link into
    ///   (HTML only)
    ///
    /// # Examples
    /// ```
    /// use pakket_status::application::dto::OutputFormat;
    /// use pakket_status::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html, None);
    /// ```
    pub fn create(format: OutputFormat, source_link_base: Option<&str>) -> Box<dyn TableFormatter> {
        match format {
            OutputFormat::Html => match source_link_base {
                Some(base) => Box::new(HtmlFormatter::with_source_link_base(base)),
                None => Box::new(HtmlFormatter::new()),
            },
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pakket_status::application::dto::OutputFormat;
    /// use pakket_status::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Generating HTML status page...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Generating HTML status page...",
            OutputFormat::Markdown => "📝 Generating Markdown status table...",
        }
    }
}
