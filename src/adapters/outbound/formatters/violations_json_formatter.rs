use crate::ports::outbound::ReportFormatter;
use crate::sbom_analysis::services::ViolationRow;
use crate::shared::Result;
use anyhow::Context;

/// ViolationsJsonFormatter adapter for the violations report
///
/// Renders a JSON array, `[]` when there is nothing to report. Pretty
/// output uses two-space indentation.
pub struct ViolationsJsonFormatter {
    pretty: bool,
}

impl ViolationsJsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter<ViolationRow> for ViolationsJsonFormatter {
    fn format(&self, rows: &[ViolationRow]) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(rows)
        } else {
            serde_json::to_string(rows)
        };
        output.context("Failed to serialize violations report")
    }
}
