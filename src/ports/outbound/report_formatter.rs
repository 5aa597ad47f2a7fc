use crate::shared::Result;

/// ReportFormatter port for rendering report rows
///
/// # Type Parameters
/// * `Row` - The row type of the report being rendered
pub trait ReportFormatter<Row> {
    /// Renders the rows into the final report text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, rows: &[Row]) -> Result<String>;
}
