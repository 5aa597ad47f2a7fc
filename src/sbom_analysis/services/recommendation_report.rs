use crate::sbom_analysis::domain::{PackageDetail, Purl, ReleaseDetail};
use std::collections::HashMap;

/// Column names of the recommendations report, in output order
pub const RECOMMENDATION_HEADER: [&str; 8] = [
    "platform",
    "name",
    "version",
    "purl",
    "license",
    "appears_maintained",
    "tidelift_recommended",
    "nearest_recommended_version",
];

/// One row of the recommendations report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationRow {
    pub platform: String,
    pub name: String,
    pub version: String,
    pub purl: String,
    pub license: String,
    pub appears_maintained: String,
    pub tidelift_recommended: String,
    pub nearest_recommended_version: String,
}

impl RecommendationRow {
    /// Field values in [`RECOMMENDATION_HEADER`] order
    pub fn fields(&self) -> [&str; 8] {
        [
            self.platform.as_str(),
            self.name.as_str(),
            self.version.as_str(),
            self.purl.as_str(),
            self.license.as_str(),
            self.appears_maintained.as_str(),
            self.tidelift_recommended.as_str(),
            self.nearest_recommended_version.as_str(),
        ]
    }
}

/// RecommendationReportBuilder joins lookup results back onto the purl list
///
/// Release records are indexed by release purl and package records by
/// package purl; when the API returns several records for one key the
/// first one wins.
pub struct RecommendationReportBuilder<'a> {
    releases: HashMap<&'a str, &'a ReleaseDetail>,
    packages: HashMap<&'a str, &'a PackageDetail>,
}

impl<'a> RecommendationReportBuilder<'a> {
    pub fn new(packages: &'a [PackageDetail], releases: &'a [ReleaseDetail]) -> Self {
        let mut release_index = HashMap::with_capacity(releases.len());
        for release in releases {
            release_index.entry(release.purl.as_str()).or_insert(release);
        }

        let mut package_index = HashMap::with_capacity(packages.len());
        for package in packages {
            package_index.entry(package.purl.as_str()).or_insert(package);
        }

        Self {
            releases: release_index,
            packages: package_index,
        }
    }

    /// Builds one row per purl, in the order given
    pub fn build(&self, purls: &[Purl]) -> Vec<RecommendationRow> {
        purls.iter().map(|purl| self.build_row(purl)).collect()
    }

    fn build_row(&self, purl: &Purl) -> RecommendationRow {
        let mut row = RecommendationRow {
            platform: purl.platform().to_string(),
            name: purl.display_name(),
            version: purl.version().unwrap_or("").to_string(),
            purl: purl.as_str().to_string(),
            ..RecommendationRow::default()
        };

        if let Some(release) = self.releases.get(purl.as_str()) {
            row.license = release.license_expression().to_string();
            row.tidelift_recommended = release.recommendation();
            row.nearest_recommended_version = release
                .nearest_recommended_version()
                .unwrap_or("")
                .to_string();
        }

        if let Some(package) = self.packages.get(purl.package_purl().as_str()) {
            row.appears_maintained = package.appears_maintained().to_string();
        }

        row
    }
}
