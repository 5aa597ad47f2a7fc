use super::violation::Violation;
use serde::Deserialize;
use std::fmt;

/// Package record returned by the package lookup endpoint.
///
/// Keyed by the package-level purl (no version).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageDetail {
    pub purl: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quality_checks: Option<QualityChecks>,
}

impl PackageDetail {
    /// Status of the "appears maintained" quality check, empty if absent
    pub fn appears_maintained(&self) -> &str {
        self.quality_checks
            .as_ref()
            .and_then(|checks| checks.package_appears_maintained.as_ref())
            .and_then(|check| check.status.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QualityChecks {
    #[serde(default)]
    pub package_appears_maintained: Option<QualityCheck>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QualityCheck {
    #[serde(default)]
    pub status: Option<String>,
}

/// Release record returned by the release lookup endpoint.
///
/// Keyed by the full release purl.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseDetail {
    pub purl: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub license: Option<ReleaseLicense>,
    #[serde(default)]
    pub tidelift_recommendation: Option<RecommendationFlag>,
    #[serde(default)]
    pub nearest_recommended_release: Option<RecommendedRelease>,
    #[serde(default)]
    pub violations: Option<Vec<Violation>>,
}

impl ReleaseDetail {
    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }

    pub fn violations(&self) -> &[Violation] {
        self.violations.as_deref().unwrap_or(&[])
    }

    pub fn license_expression(&self) -> &str {
        self.license
            .as_ref()
            .and_then(|license| license.expression.as_deref())
            .unwrap_or("")
    }

    /// Version of the nearest release Tidelift recommends, if any
    pub fn nearest_recommended_version(&self) -> Option<&str> {
        self.nearest_recommended_release
            .as_ref()
            .and_then(|release| release.version.as_deref())
    }

    pub fn recommendation(&self) -> String {
        self.tidelift_recommendation
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn published_at(&self) -> &str {
        self.published_at.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReleaseLicense {
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendedRelease {
    #[serde(default)]
    pub version: Option<String>,
}

/// Tidelift's recommendation for a release.
///
/// The API sends either a JSON boolean or a string such as `"unknown"`;
/// both render as their plain text form in reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecommendationFlag {
    Flag(bool),
    Text(String),
}

impl fmt::Display for RecommendationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationFlag::Flag(value) => write!(f, "{}", value),
            RecommendationFlag::Text(value) => f.write_str(value),
        }
    }
}

/// Package the API could not find
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissingPackage {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Release the API could not find
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MissingRelease {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Accumulated result of a chunked bulk lookup.
///
/// `failed_purls` lists the purls whose chunk request failed; they are
/// neither found nor missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T, M> {
    pub found: Vec<T>,
    pub missing: Vec<M>,
    pub failed_purls: Vec<String>,
}

impl<T, M> Lookup<T, M> {
    pub fn has_failures(&self) -> bool {
        !self.failed_purls.is_empty()
    }
}

impl<T, M> Default for Lookup<T, M> {
    fn default() -> Self {
        Self {
            found: Vec::new(),
            missing: Vec::new(),
            failed_purls: Vec::new(),
        }
    }
}

pub type PackageLookup = Lookup<PackageDetail, MissingPackage>;
pub type ReleaseLookup = Lookup<ReleaseDetail, MissingRelease>;
