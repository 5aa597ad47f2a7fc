use crate::shared::Result;
use packageurl::PackageUrl;
use std::fmt;
use std::str::FromStr;

/// Package ecosystems that the Tidelift catalog knows about.
///
/// Each variant corresponds to one purl type and maps to the platform
/// name the Tidelift API uses for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Cargo,
    Composer,
    Gem,
    Golang,
    Maven,
    Npm,
    Nuget,
    Pypi,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 8] = [
        Ecosystem::Cargo,
        Ecosystem::Composer,
        Ecosystem::Gem,
        Ecosystem::Golang,
        Ecosystem::Maven,
        Ecosystem::Npm,
        Ecosystem::Nuget,
        Ecosystem::Pypi,
    ];

    /// Looks up the ecosystem for a purl type, `None` if unsupported
    pub fn from_purl_type(purl_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ecosystem| ecosystem.purl_type() == purl_type)
    }

    pub fn purl_type(&self) -> &'static str {
        match self {
            Ecosystem::Cargo => "cargo",
            Ecosystem::Composer => "composer",
            Ecosystem::Gem => "gem",
            Ecosystem::Golang => "golang",
            Ecosystem::Maven => "maven",
            Ecosystem::Npm => "npm",
            Ecosystem::Nuget => "nuget",
            Ecosystem::Pypi => "pypi",
        }
    }

    /// Tidelift platform name for this ecosystem
    pub fn platform(&self) -> &'static str {
        match self {
            Ecosystem::Cargo => "cargo",
            Ecosystem::Composer => "packagist",
            Ecosystem::Gem => "rubygems",
            Ecosystem::Golang => "go",
            Ecosystem::Maven => "maven",
            Ecosystem::Npm => "npm",
            Ecosystem::Nuget => "nuget",
            Ecosystem::Pypi => "pypi",
        }
    }

    /// Separator between namespace and name in Tidelift package names
    fn name_separator(&self) -> char {
        match self {
            Ecosystem::Maven => ':',
            _ => '/',
        }
    }
}

/// A parsed package URL.
///
/// Identity is the normalized string form produced by the `packageurl`
/// crate, so two purls that normalize to the same string compare equal.
/// The package-level form (no version, qualifiers or subpath) is derived
/// once at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Purl {
    purl_type: String,
    namespace: Option<String>,
    name: String,
    version: Option<String>,
    canonical: String,
    package_canonical: String,
}

impl Purl {
    /// Parses and normalizes a purl string
    ///
    /// # Errors
    /// Returns an error if the string is not a valid package URL
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = PackageUrl::from_str(value)
            .map_err(|e| anyhow::anyhow!("Invalid package URL '{}': {}", value, e))?;

        let mut package = PackageUrl::new(parsed.ty().to_string(), parsed.name().to_string())
            .map_err(|e| anyhow::anyhow!("Invalid package URL '{}': {}", value, e))?;
        if let Some(namespace) = parsed.namespace() {
            package.with_namespace(namespace.to_string());
        }

        Ok(Self {
            purl_type: parsed.ty().to_string(),
            namespace: parsed.namespace().map(str::to_string),
            name: parsed.name().to_string(),
            version: parsed.version().map(str::to_string),
            canonical: parsed.to_string(),
            package_canonical: package.to_string(),
        })
    }

    pub fn purl_type(&self) -> &str {
        &self.purl_type
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Normalized string form, the identity key of the purl
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn ecosystem(&self) -> Option<Ecosystem> {
        Ecosystem::from_purl_type(&self.purl_type)
    }

    /// Tidelift platform name, empty for unsupported ecosystems
    pub fn platform(&self) -> &'static str {
        self.ecosystem().map(|e| e.platform()).unwrap_or("")
    }

    /// Converts a release purl into its package purl.
    ///
    /// Version, qualifiers and subpath are dropped; type, namespace and
    /// name are kept as they are.
    pub fn package_purl(&self) -> Purl {
        Purl {
            purl_type: self.purl_type.clone(),
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            version: None,
            canonical: self.package_canonical.clone(),
            package_canonical: self.package_canonical.clone(),
        }
    }

    /// Package name as Tidelift displays it.
    ///
    /// Maven joins namespace and name with `:`, every other ecosystem
    /// with `/`. Without a namespace the bare name is returned.
    pub fn display_name(&self) -> String {
        match &self.namespace {
            None => self.name.clone(),
            Some(namespace) if namespace.is_empty() => self.name.clone(),
            Some(namespace) => {
                let separator = self
                    .ecosystem()
                    .map(|e| e.name_separator())
                    .unwrap_or('/');
                format!("{}{}{}", namespace, separator, self.name)
            }
        }
    }
}

impl fmt::Display for Purl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Purl {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Purl::parse(s)
    }
}
