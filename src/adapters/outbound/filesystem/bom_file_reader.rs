use crate::ports::outbound::BomReader;
use crate::sbom_analysis::domain::{BomComponent, BomDocument};
use crate::shared::error::ReporterError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Maximum SBOM size accepted (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects files larger than `max_size` bytes before they are read
fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(ReporterError::BomParseError {
            path: path.to_path_buf(),
            details: format!(
                "file is too large ({} bytes). Maximum allowed size is {} bytes",
                file_size, max_size
            ),
        }
        .into());
    }
    Ok(())
}

// CycloneDX JSON wire format, reduced to the fields the reports read

#[derive(Debug, Deserialize)]
struct CycloneDxBom {
    #[serde(default)]
    metadata: Option<CycloneDxMetadata>,
    #[serde(default)]
    components: Option<Vec<CycloneDxComponent>>,
}

#[derive(Debug, Deserialize)]
struct CycloneDxMetadata {
    #[serde(default)]
    component: Option<CycloneDxComponent>,
}

#[derive(Debug, Deserialize)]
struct CycloneDxComponent {
    #[serde(rename = "type", default)]
    component_type: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    purl: Option<String>,
}

impl From<CycloneDxComponent> for BomComponent {
    fn from(component: CycloneDxComponent) -> Self {
        BomComponent {
            component_type: component.component_type.unwrap_or_default(),
            name: component.name.unwrap_or_default(),
            purl: component.purl,
        }
    }
}

/// BomFileReader adapter for reading CycloneDX JSON files from disk
///
/// Implements the BomReader port. Only the top-level `components` list and
/// `metadata.component.name` are read.
pub struct BomFileReader;

impl BomFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads the file after checking it is a regular file of sane size
    fn read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|_| ReporterError::BomNotFound {
            path: path.to_path_buf(),
        })?;

        if !metadata.is_file() {
            return Err(ReporterError::BomParseError {
                path: path.to_path_buf(),
                details: "not a regular file".to_string(),
            }
            .into());
        }

        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            ReporterError::BomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Decodes CycloneDX JSON content into the domain document
    pub fn parse(&self, content: &str, path: &Path) -> Result<BomDocument> {
        let bom: CycloneDxBom =
            serde_json::from_str(content).map_err(|e| ReporterError::BomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let name = match bom.metadata.and_then(|m| m.component) {
            Some(component) => component.name,
            None => {
                warn!("CycloneDX file does not have any metadata");
                None
            }
        };

        let components = match bom.components {
            Some(components) => Some(components.into_iter().map(BomComponent::from).collect()),
            None => {
                warn!("CycloneDX file does not have any components");
                None
            }
        };

        Ok(BomDocument::new(name, components))
    }
}

impl Default for BomFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BomReader for BomFileReader {
    fn read_bom(&self, path: &Path) -> Result<BomDocument> {
        let content = self.read_file(path)?;
        self.parse(&content, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ExitCode;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SAMPLE_BOM: &str = r#"{
        "bomFormat": "CycloneDX",
        "specVersion": "1.5",
        "version": 1,
        "metadata": {
            "component": {"type": "application", "name": "my-app", "version": "1.0.0"}
        },
        "components": [
            {"type": "library", "name": "lodash", "version": "4.17.21", "purl": "pkg:npm/lodash@4.17.21"},
            {"type": "library", "name": "internal-lib"},
            {"type": "operating-system", "name": "debian"}
        ]
    }"#;

    #[test]
    fn test_validate_file_size_within_limit() {
        let path = PathBuf::from("/test/bom.json");
        assert!(validate_file_size(1000, &path, MAX_FILE_SIZE).is_ok());
        assert!(validate_file_size(MAX_FILE_SIZE, &path, MAX_FILE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/bom.json");
        let err = validate_file_size(MAX_FILE_SIZE + 1, &path, MAX_FILE_SIZE).unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_max_file_size_constant() {
        assert_eq!(MAX_FILE_SIZE, 100 * 1024 * 1024);
    }

    #[test]
    fn test_read_bom_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bom.json");
        fs::write(&path, SAMPLE_BOM).unwrap();

        let document = BomFileReader::new().read_bom(&path).unwrap();

        assert_eq!(document.project_name(), "my-app");
        let components = document.components.unwrap();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0].component_type, "library");
        assert_eq!(components[0].purl.as_deref(), Some("pkg:npm/lodash@4.17.21"));
        assert_eq!(components[1].purl, None);
        assert_eq!(components[2].component_type, "operating-system");
    }

    #[test]
    fn test_read_bom_not_found() {
        let result = BomFileReader::new().read_bom(&PathBuf::from("/nonexistent/bom.json"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("SBOM file not found"));
        assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    }

    #[test]
    fn test_read_bom_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = BomFileReader::new().read_bom(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_bom_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bom.json");
        fs::write(&path, "{ not json").unwrap();

        let err = BomFileReader::new().read_bom(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse SBOM file"));
    }

    #[test]
    fn test_parse_without_metadata_or_components() {
        let document = BomFileReader::new()
            .parse(r#"{"bomFormat": "CycloneDX"}"#, Path::new("bom.json"))
            .unwrap();
        assert_eq!(document.project_name(), "");
        assert!(document.components.is_none());
    }

    #[test]
    fn test_parse_metadata_without_component() {
        let document = BomFileReader::new()
            .parse(
                r#"{"metadata": {"timestamp": "2024-01-01T00:00:00Z"}, "components": []}"#,
                Path::new("bom.json"),
            )
            .unwrap();
        assert_eq!(document.name, None);
        assert_eq!(document.components, Some(vec![]));
    }
}
