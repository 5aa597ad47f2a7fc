use crate::ports::outbound::ReportFormatter;
use crate::sbom_analysis::services::{RecommendationRow, RECOMMENDATION_HEADER};
use crate::shared::Result;
use anyhow::Context;

/// CsvReportFormatter adapter for the recommendations report
///
/// Always writes the header row, so an empty report is a single line.
/// Fields are quoted only when they need to be.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter<RecommendationRow> for CsvReportFormatter {
    fn format(&self, rows: &[RecommendationRow]) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(RECOMMENDATION_HEADER)
            .context("Failed to write CSV header")?;
        for row in rows {
            writer
                .write_record(row.fields())
                .with_context(|| format!("Failed to write CSV row for {}", row.purl))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}
