use std::path::Path;
use tidelift_sbom_info::prelude::*;

/// Mock BomReader returning a fixed document, or failing like a missing file
pub struct MockBomReader {
    document: Option<BomDocument>,
}

impl MockBomReader {
    pub fn new(name: Option<&str>, components: Vec<BomComponent>) -> Self {
        Self {
            document: Some(BomDocument::new(name.map(str::to_string), Some(components))),
        }
    }

    /// A reader whose document has neither metadata nor components
    pub fn empty() -> Self {
        Self {
            document: Some(BomDocument::default()),
        }
    }

    pub fn failing() -> Self {
        Self { document: None }
    }
}

impl BomReader for MockBomReader {
    fn read_bom(&self, path: &Path) -> Result<BomDocument> {
        match &self.document {
            Some(document) => Ok(document.clone()),
            None => Err(tidelift_sbom_info::shared::error::ReporterError::BomNotFound {
                path: path.to_path_buf(),
            }
            .into()),
        }
    }
}

/// Shorthand for a library component with a purl
pub fn library(name: &str, purl: &str) -> BomComponent {
    BomComponent::new("library", name, Some(purl))
}
