use std::path::PathBuf;

/// ReportRequest - Request DTO shared by both report use cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    /// Path to the CycloneDX JSON document
    pub sbom_path: PathBuf,
}

impl ReportRequest {
    pub fn new(sbom_path: impl Into<PathBuf>) -> Self {
        Self {
            sbom_path: sbom_path.into(),
        }
    }
}
