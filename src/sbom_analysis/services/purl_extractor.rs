use crate::sbom_analysis::domain::{BomComponent, Purl};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Why a component did not make it into the purl list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotLibrary,
    MissingPurl,
    MalformedPurl,
    UnsupportedEcosystem,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            SkipReason::NotLibrary => "Skipping non-library component in SBOM",
            SkipReason::MissingPurl => "Skipping component in SBOM without purl",
            SkipReason::MalformedPurl => "Skipping malformed purl",
            SkipReason::UnsupportedEcosystem => {
                "Skipping component in SBOM with unsupported purl type"
            }
        };
        f.write_str(message)
    }
}

/// PurlExtractor service for turning SBOM components into lookup keys
///
/// Only library components with a parseable purl of a supported
/// ecosystem are kept. Duplicates (by normalized purl string) collapse
/// into one entry; the first occurrence fixes the position.
pub struct PurlExtractor;

impl PurlExtractor {
    /// Classifies a single component
    ///
    /// # Returns
    /// The parsed purl, or the reason the component is skipped
    pub fn classify(component: &BomComponent) -> Result<Purl, SkipReason> {
        if !component.is_library() {
            return Err(SkipReason::NotLibrary);
        }

        let raw = match component.purl.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(SkipReason::MissingPurl),
        };

        let purl = Purl::parse(raw).map_err(|_| SkipReason::MalformedPurl)?;

        if purl.ecosystem().is_none() {
            return Err(SkipReason::UnsupportedEcosystem);
        }

        Ok(purl)
    }

    /// Extracts the de-duplicated list of supported purls
    pub fn extract_supported(components: &[BomComponent]) -> Vec<Purl> {
        let mut seen = HashSet::new();
        let mut purls = Vec::new();

        for component in components {
            match Self::classify(component) {
                Ok(purl) => {
                    if seen.insert(purl.as_str().to_string()) {
                        purls.push(purl);
                    }
                }
                Err(reason) => {
                    debug!(
                        component_type = %component.component_type,
                        name = %component.name,
                        purl = component.purl.as_deref().unwrap_or(""),
                        "{}",
                        reason
                    );
                }
            }
        }

        debug!("Found {} purls", purls.len());
        purls
    }
}
