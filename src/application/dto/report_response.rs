use crate::sbom_analysis::domain::{MissingPackage, MissingRelease};
use crate::sbom_analysis::services::{RecommendationRow, ViolationRow};

/// RecommendationsResponse - Result of the recommendations use case
///
/// `rows` is what gets rendered; the remaining fields describe what the
/// catalog could not answer.
#[derive(Debug, Clone, Default)]
pub struct RecommendationsResponse {
    pub rows: Vec<RecommendationRow>,
    pub missing_packages: Vec<MissingPackage>,
    pub missing_releases: Vec<MissingRelease>,
    /// Purls whose lookup request failed, in either lookup
    pub failed_purls: Vec<String>,
}

/// ViolationsResponse - Result of the violations use case
#[derive(Debug, Clone, Default)]
pub struct ViolationsResponse {
    /// Project name stamped on every row
    pub project_name: String,
    pub rows: Vec<ViolationRow>,
    pub missing_releases: Vec<MissingRelease>,
    pub failed_purls: Vec<String>,
}
