use crate::ports::outbound::{BomReader, ProgressReporter};
use crate::sbom_analysis::domain::Purl;
use crate::sbom_analysis::services::PurlExtractor;
use crate::shared::Result;
use std::path::Path;

/// Purls read from one SBOM, with the document's declared project name
pub(crate) struct SupportedPurls {
    pub project_name: String,
    pub purls: Vec<Purl>,
}

/// Reads the SBOM and extracts its supported, de-duplicated purls
pub(crate) fn read_supported_purls<B, P>(
    bom_reader: &B,
    progress_reporter: &P,
    sbom_path: &Path,
) -> Result<SupportedPurls>
where
    B: BomReader,
    P: ProgressReporter,
{
    progress_reporter.report(&format!("Reading SBOM from {}", sbom_path.display()));

    let document = bom_reader.read_bom(sbom_path)?;
    let components = document.components.as_deref().unwrap_or_default();
    let purls = PurlExtractor::extract_supported(components);

    Ok(SupportedPurls {
        project_name: document.project_name().to_string(),
        purls,
    })
}
