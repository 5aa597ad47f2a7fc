use crate::sbom_analysis::domain::BomDocument;
use crate::shared::Result;
use std::path::Path;

/// BomReader port for loading an SBOM document
///
/// This port abstracts where the CycloneDX document comes from and how it
/// is decoded.
pub trait BomReader {
    /// Reads the SBOM at the given path
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a CycloneDX JSON document
    fn read_bom(&self, path: &Path) -> Result<BomDocument>;
}
