use std::sync::{Arc, Mutex};
use tidelift_sbom_info::prelude::*;
use tidelift_sbom_info::ports::outbound::LookupProgressCallback;
use tidelift_sbom_info::sbom_analysis::domain::{
    MissingPackage, MissingRelease, PackageLookup, ReleaseLookup,
};

/// Mock CatalogRepository answering from in-memory records
///
/// Records are returned when their purl was asked for (package records
/// match on the package-level purl). Requested purls are captured so tests
/// can check what was sent.
#[derive(Default, Clone)]
pub struct MockCatalogRepository {
    packages: Vec<PackageDetail>,
    releases: Vec<ReleaseDetail>,
    missing_packages: Vec<MissingPackage>,
    missing_releases: Vec<MissingRelease>,
    fail_packages: bool,
    fail_releases: bool,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, value: serde_json::Value) -> Self {
        self.packages.push(serde_json::from_value(value).unwrap());
        self
    }

    pub fn with_release(mut self, value: serde_json::Value) -> Self {
        self.releases.push(serde_json::from_value(value).unwrap());
        self
    }

    pub fn with_missing_package(mut self, value: serde_json::Value) -> Self {
        self.missing_packages
            .push(serde_json::from_value(value).unwrap());
        self
    }

    pub fn with_missing_release(mut self, value: serde_json::Value) -> Self {
        self.missing_releases
            .push(serde_json::from_value(value).unwrap());
        self
    }

    /// Every package lookup fails as if the API were down
    pub fn failing_packages(mut self) -> Self {
        self.fail_packages = true;
        self
    }

    /// Every release lookup fails as if the API were down
    pub fn failing_releases(mut self) -> Self {
        self.fail_releases = true;
        self
    }

    pub fn requested_purls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn record(&self, purls: &[Purl]) -> Vec<String> {
        let keys: Vec<String> = purls.iter().map(|p| p.as_str().to_string()).collect();
        self.requested.lock().unwrap().extend(keys.iter().cloned());
        keys
    }
}

impl CatalogRepository for MockCatalogRepository {
    fn lookup_packages(&self, purls: &[Purl], progress: LookupProgressCallback<'_>) -> PackageLookup {
        let keys = self.record(purls);
        progress(1, 1);

        if self.fail_packages {
            return PackageLookup {
                failed_purls: keys,
                ..PackageLookup::default()
            };
        }

        let package_keys: Vec<String> = purls
            .iter()
            .map(|p| p.package_purl().as_str().to_string())
            .collect();
        PackageLookup {
            found: self
                .packages
                .iter()
                .filter(|p| package_keys.contains(&p.purl))
                .cloned()
                .collect(),
            missing: self.missing_packages.clone(),
            failed_purls: Vec::new(),
        }
    }

    fn lookup_releases(&self, purls: &[Purl], progress: LookupProgressCallback<'_>) -> ReleaseLookup {
        let keys = self.record(purls);
        progress(1, 1);

        if self.fail_releases {
            return ReleaseLookup {
                failed_purls: keys,
                ..ReleaseLookup::default()
            };
        }

        ReleaseLookup {
            found: self
                .releases
                .iter()
                .filter(|r| keys.contains(&r.purl))
                .cloned()
                .collect(),
            missing: self.missing_releases.clone(),
            failed_purls: Vec::new(),
        }
    }
}
