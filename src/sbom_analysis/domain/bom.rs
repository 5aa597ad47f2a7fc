/// Component type that carries a package URL we can look up
pub const LIBRARY_COMPONENT_TYPE: &str = "library";

/// The parts of a CycloneDX document the reports need
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomDocument {
    /// Name of the top-level component in `metadata.component`, if declared
    pub name: Option<String>,
    /// Top-level components; `None` when the document has no list at all
    pub components: Option<Vec<BomComponent>>,
}

impl BomDocument {
    pub fn new(name: Option<String>, components: Option<Vec<BomComponent>>) -> Self {
        Self { name, components }
    }

    /// Declared project name, empty when the document has none
    pub fn project_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BomComponent {
    pub component_type: String,
    pub name: String,
    pub purl: Option<String>,
}

impl BomComponent {
    pub fn new(component_type: &str, name: &str, purl: Option<&str>) -> Self {
        Self {
            component_type: component_type.to_string(),
            name: name.to_string(),
            purl: purl.map(str::to_string),
        }
    }

    pub fn is_library(&self) -> bool {
        self.component_type == LIBRARY_COMPONENT_TYPE
    }
}
