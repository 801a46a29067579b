/// ProgressReporter port for user feedback while the dashboard loads
///
/// Feedback goes to a side channel (e.g., stderr) so the rendered document
/// on stdout stays clean. Failures the dashboard degrades around (network
/// errors, schema drift) are reported through `report_error` and never
/// abort the run.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports that the dashboard is waiting on the network; the indicator
    /// stays up until the next message of any kind
    ///
    /// # Arguments
    /// * `message` - What is being waited on
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
