use crate::sbom_analysis::domain::{PackageLookup, Purl, ReleaseLookup};

/// Callback invoked after each lookup request with (completed, total) chunks
pub type LookupProgressCallback<'a> = &'a dyn Fn(usize, usize);

/// CatalogRepository port for bulk lookups against the Tidelift catalog
///
/// Lookups never fail as a whole. A request that fails is logged and its
/// purls are listed in [`Lookup::failed_purls`](crate::sbom_analysis::domain::Lookup)
/// instead of contributing records.
pub trait CatalogRepository {
    /// Looks up package-level records (maintenance status) for the purls
    fn lookup_packages(&self, purls: &[Purl], progress: LookupProgressCallback<'_>)
        -> PackageLookup;

    /// Looks up release-level records (license, recommendation, violations)
    fn lookup_releases(&self, purls: &[Purl], progress: LookupProgressCallback<'_>)
        -> ReleaseLookup;
}
