use crate::models::DailyReport;

/// Turns a day's metrics and data points into a downloadable document.
pub trait ReportRenderer {
    /// Error type for rendering failures
    type Error: std::error::Error;

    /// The MIME type of the rendered document
    fn content_type(&self) -> &'static str;

    /// The file extension used when offering the document for download
    fn file_extension(&self) -> &'static str;

    /// Render the report into an in-memory document.
    fn render(&self, report: &DailyReport<'_>) -> Result<Vec<u8>, Self::Error>;
}
