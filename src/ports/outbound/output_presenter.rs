use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered dashboard document is written.
pub trait OutputPresenter {
    /// Presents the rendered document to the output destination
    ///
    /// # Arguments
    /// * `content` - The complete rendered document
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
