use crate::sbom_analysis::domain::{Purl, ReleaseDetail, Violation, ViolationDetails};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Dependency scope stamped on every row; SBOM components are resolved
/// lockfile entries
const DEPENDENCY_SCOPE: &str = "lockfile";

const NO_UPGRADE_PATH_ACTION: &str = "There is no available upgrade that fixes this issue. To avoid this, you may need to use a different package.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    DirectUpgrade,
    NoUpgradePath,
}

/// One violation in the report.
///
/// The field set and names match Tidelift's violation export so the file
/// can be imported alongside project reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationRow {
    pub project: String,
    pub external_identifier: String,
    pub branch: String,
    pub catalog: String,
    pub groups: String,
    pub violation_type: String,
    pub direct_package_platform: String,
    pub direct_package_name: String,
    pub direct_package_version: String,
    #[serde(rename = "direct_package_version_published_at")]
    pub direct_package_published_at: String,
    pub direct_purl: String,
    pub violating_package_platform: String,
    pub violating_package_name: String,
    pub violating_package_version: String,
    #[serde(rename = "violating_package_version_published_at")]
    pub violating_package_published_at: String,
    pub violating_purl: String,
    pub violation_first_introduced_at: String,
    pub dependency_chain: String,
    pub dependency_scope: String,
    pub dependency_type: String,
    pub action: String,
    pub action_status: ActionStatus,
    pub action_recommendation: String,
    // Misspelt in the import format
    #[serde(rename = "recommended_dependency_chanin")]
    pub recommended_dependency_chain: String,
    pub violation_title: String,
    pub violation_description: String,
    pub violation_allowed: bool,
    pub violation_details: ViolationDetails,
    pub report_date: String,
}

/// ViolationReportBuilder flattens release violations into report rows
pub struct ViolationReportBuilder {
    project: String,
    report_date: String,
}

impl ViolationReportBuilder {
    /// # Arguments
    /// * `project` - Project name written on every row
    /// * `report_date` - RFC 3339 timestamp shared by every row
    pub fn new(project: impl Into<String>, report_date: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            report_date: report_date.into(),
        }
    }

    /// Builds the rows for every violation of every matching release
    ///
    /// Rows follow the purl order, then release order, then violation
    /// order. Violations of categories the report does not cover are
    /// skipped.
    pub fn build(&self, purls: &[Purl], releases: &[ReleaseDetail]) -> Vec<ViolationRow> {
        let mut by_purl: HashMap<&str, Vec<&ReleaseDetail>> = HashMap::new();
        for release in releases {
            by_purl.entry(release.purl.as_str()).or_default().push(release);
        }

        let mut rows = Vec::new();
        for purl in purls {
            let Some(matching) = by_purl.get(purl.as_str()) else {
                continue;
            };
            for release in matching {
                for violation in release.violations() {
                    if let Some(row) = self.build_row(purl, release, violation) {
                        rows.push(row);
                    }
                }
            }
        }
        rows
    }

    fn build_row(
        &self,
        purl: &Purl,
        release: &ReleaseDetail,
        violation: &Violation,
    ) -> Option<ViolationRow> {
        let Some(details) = violation.details() else {
            debug!("skipping violation for {}", violation.catalog_standard());
            return None;
        };

        let (action, action_status, action_recommendation) =
            match release.nearest_recommended_version() {
                Some(nearest) => {
                    let text = format!(
                        "Upgrade {} from {} to {}",
                        release.name(),
                        release.version(),
                        nearest
                    );
                    (text.clone(), ActionStatus::DirectUpgrade, text)
                }
                None => (
                    NO_UPGRADE_PATH_ACTION.to_string(),
                    ActionStatus::NoUpgradePath,
                    String::new(),
                ),
            };

        Some(ViolationRow {
            project: self.project.clone(),
            external_identifier: String::new(),
            branch: String::new(),
            catalog: String::new(),
            groups: String::new(),
            violation_type: violation.catalog_standard().to_string(),
            direct_package_platform: release.platform().to_string(),
            direct_package_name: release.name().to_string(),
            direct_package_version: release.version().to_string(),
            direct_package_published_at: release.published_at().to_string(),
            direct_purl: purl.as_str().to_string(),
            violating_package_platform: release.platform().to_string(),
            violating_package_name: release.name().to_string(),
            violating_package_version: release.version().to_string(),
            violating_package_published_at: release.published_at().to_string(),
            violating_purl: purl.as_str().to_string(),
            violation_first_introduced_at: String::new(),
            dependency_chain: String::new(),
            dependency_scope: DEPENDENCY_SCOPE.to_string(),
            dependency_type: String::new(),
            action,
            action_status,
            action_recommendation,
            recommended_dependency_chain: String::new(),
            violation_title: violation.title().to_string(),
            violation_description: String::new(),
            violation_allowed: false,
            violation_details: details,
            report_date: self.report_date.clone(),
        })
    }
}
