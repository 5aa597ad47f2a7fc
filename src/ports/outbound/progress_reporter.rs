/// ProgressReporter port for reporting progress during a report run
///
/// Implementations must keep stdout untouched; the report itself may be
/// written there.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total expected steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
