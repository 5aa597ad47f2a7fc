use super::supported_purls::read_supported_purls;
use crate::application::dto::{RecommendationsResponse, ReportRequest};
use crate::ports::outbound::{BomReader, CatalogRepository, ProgressReporter};
use crate::sbom_analysis::services::RecommendationReportBuilder;
use crate::shared::Result;
use std::collections::HashSet;
use tracing::{debug, warn};

/// AnalyzeRecommendationsUseCase - Builds the package/release recommendations report
///
/// Reads the SBOM, looks every supported purl up against both the package
/// and the release endpoints, and joins the answers back onto the purl list.
///
/// # Type Parameters
/// * `B` - BomReader implementation
/// * `C` - CatalogRepository implementation
/// * `P` - ProgressReporter implementation
pub struct AnalyzeRecommendationsUseCase<B, C, P> {
    bom_reader: B,
    catalog: C,
    progress_reporter: P,
}

impl<B, C, P> AnalyzeRecommendationsUseCase<B, C, P>
where
    B: BomReader,
    C: CatalogRepository,
    P: ProgressReporter,
{
    pub fn new(bom_reader: B, catalog: C, progress_reporter: P) -> Self {
        Self {
            bom_reader,
            catalog,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails only when the SBOM cannot be read. Lookup failures leave
    /// the affected rows with empty catalog fields and are listed in
    /// [`RecommendationsResponse::failed_purls`].
    pub fn execute(&self, request: ReportRequest) -> Result<RecommendationsResponse> {
        let supported =
            read_supported_purls(&self.bom_reader, &self.progress_reporter, &request.sbom_path)?;
        let purls = supported.purls;

        self.progress_reporter
            .report(&format!("Looking up {} package(s)", purls.len()));
        let packages = self.catalog.lookup_packages(&purls, &|done, total| {
            self.progress_reporter
                .report_progress(done, total, Some("packages"))
        });
        self.progress_reporter.report_completion("Package lookup complete");
        debug!("Found {} packages", packages.found.len());
        debug!("{} packages not found", packages.missing.len());

        self.progress_reporter
            .report(&format!("Looking up {} release(s)", purls.len()));
        let releases = self.catalog.lookup_releases(&purls, &|done, total| {
            self.progress_reporter
                .report_progress(done, total, Some("releases"))
        });
        self.progress_reporter.report_completion("Release lookup complete");
        debug!("Found {} releases", releases.found.len());
        debug!("{} releases not found", releases.missing.len());

        let rows = RecommendationReportBuilder::new(&packages.found, &releases.found).build(&purls);

        let mut seen: HashSet<String> = packages.failed_purls.iter().cloned().collect();
        let mut failed_purls = packages.failed_purls;
        for purl in releases.failed_purls {
            if seen.insert(purl.clone()) {
                failed_purls.push(purl);
            }
        }
        if !failed_purls.is_empty() {
            warn!(
                "{} purl(s) could not be looked up; their rows have no catalog data",
                failed_purls.len()
            );
        }

        Ok(RecommendationsResponse {
            rows,
            missing_packages: packages.missing,
            missing_releases: releases.missing,
            failed_purls,
        })
    }
}
