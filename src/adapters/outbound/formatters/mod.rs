/// Formatter adapters for the rendered table
mod html_formatter;
mod markdown_formatter;

pub use html_formatter::{escape_html, HtmlFormatter};
pub use markdown_formatter::MarkdownFormatter;
