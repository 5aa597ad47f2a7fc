use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog standard violation attached to a release.
///
/// The details payload lives under a category-specific key next to the
/// known fields, so everything else is kept in `additional` until
/// [`Violation::details`] picks the right entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Violation {
    #[serde(default)]
    pub catalog_standard: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

impl Violation {
    pub fn catalog_standard(&self) -> &str {
        self.catalog_standard.as_deref().unwrap_or("")
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> Option<ViolationCategory> {
        ViolationCategory::from_catalog_standard(self.catalog_standard())
    }

    /// Extracts the details payload for this violation's category.
    ///
    /// Returns `None` for categories the report does not cover. A known
    /// category whose payload is absent yields a `Null` payload.
    pub fn details(&self) -> Option<ViolationDetails> {
        let category = self.category()?;
        let payload = category
            .details_key()
            .and_then(|key| self.additional.get(key))
            .cloned()
            .unwrap_or(Value::Null);

        Some(match category {
            ViolationCategory::Vulnerabilities => ViolationDetails::Vulnerability(payload),
            ViolationCategory::Deprecation => ViolationDetails::Deprecation(payload),
            ViolationCategory::UpToDate => ViolationDetails::UpToDate(payload),
            ViolationCategory::Prereleases => ViolationDetails::Prerelease,
            ViolationCategory::EolPackages => ViolationDetails::EolPackage(payload),
        })
    }
}

/// Catalog standards included in the violations report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCategory {
    Vulnerabilities,
    Deprecation,
    UpToDate,
    Prereleases,
    EolPackages,
}

impl ViolationCategory {
    pub fn from_catalog_standard(value: &str) -> Option<Self> {
        match value {
            "vulnerabilities" => Some(ViolationCategory::Vulnerabilities),
            "deprecation" => Some(ViolationCategory::Deprecation),
            "up_to_date" => Some(ViolationCategory::UpToDate),
            "prereleases" => Some(ViolationCategory::Prereleases),
            "eol_packages" => Some(ViolationCategory::EolPackages),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCategory::Vulnerabilities => "vulnerabilities",
            ViolationCategory::Deprecation => "deprecation",
            ViolationCategory::UpToDate => "up_to_date",
            ViolationCategory::Prereleases => "prereleases",
            ViolationCategory::EolPackages => "eol_packages",
        }
    }

    /// Key of the details object in the API payload
    fn details_key(&self) -> Option<&'static str> {
        match self {
            ViolationCategory::Vulnerabilities => Some("vulnerability"),
            ViolationCategory::Deprecation => Some("deprecation"),
            ViolationCategory::UpToDate => Some("up_to_date"),
            ViolationCategory::Prereleases => None,
            ViolationCategory::EolPackages => Some("eol_package"),
        }
    }
}

/// Category-specific violation details.
///
/// Serializes as the bare payload; prereleases carry none and serialize
/// as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViolationDetails {
    Vulnerability(Value),
    Deprecation(Value),
    UpToDate(Value),
    Prerelease,
    EolPackage(Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violation(value: Value) -> Violation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_category_round_trip() {
        for category in [
            ViolationCategory::Vulnerabilities,
            ViolationCategory::Deprecation,
            ViolationCategory::UpToDate,
            ViolationCategory::Prereleases,
            ViolationCategory::EolPackages,
        ] {
            assert_eq!(
                ViolationCategory::from_catalog_standard(category.as_str()),
                Some(category)
            );
        }
        assert_eq!(ViolationCategory::from_catalog_standard("licenses"), None);
    }

    #[test]
    fn test_vulnerability_details_extracted() {
        let v = violation(json!({
            "catalog_standard": "vulnerabilities",
            "title": "Prototype pollution",
            "vulnerability": {"id": "CVE-2021-23337", "severity": "high"}
        }));
        assert_eq!(v.category(), Some(ViolationCategory::Vulnerabilities));
        assert_eq!(v.title(), "Prototype pollution");
        assert_eq!(
            v.details(),
            Some(ViolationDetails::Vulnerability(
                json!({"id": "CVE-2021-23337", "severity": "high"})
            ))
        );
    }

    #[test]
    fn test_eol_details_use_singular_key() {
        let v = violation(json!({
            "catalog_standard": "eol_packages",
            "eol_package": {"eol_date": "2023-01-01"}
        }));
        assert_eq!(
            v.details(),
            Some(ViolationDetails::EolPackage(json!({"eol_date": "2023-01-01"})))
        );
    }

    #[test]
    fn test_prerelease_details_serialize_as_null() {
        let v = violation(json!({"catalog_standard": "prereleases", "title": "Prerelease"}));
        let details = v.details().unwrap();
        assert_eq!(details, ViolationDetails::Prerelease);
        assert_eq!(serde_json::to_value(&details).unwrap(), Value::Null);
    }

    #[test]
    fn test_missing_payload_is_null() {
        let v = violation(json!({"catalog_standard": "deprecation"}));
        assert_eq!(v.details(), Some(ViolationDetails::Deprecation(Value::Null)));
    }

    #[test]
    fn test_unknown_category_has_no_details() {
        let v = violation(json!({"catalog_standard": "licenses", "license": {"id": "GPL"}}));
        assert_eq!(v.category(), None);
        assert_eq!(v.details(), None);
    }

    #[test]
    fn test_details_serialize_as_bare_payload() {
        let details = ViolationDetails::UpToDate(json!({"latest": "2.0.0"}));
        assert_eq!(
            serde_json::to_string(&details).unwrap(),
            r#"{"latest":"2.0.0"}"#
        );
    }
}
