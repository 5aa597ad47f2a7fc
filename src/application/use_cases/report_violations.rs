use super::supported_purls::read_supported_purls;
use crate::application::dto::{ReportRequest, ViolationsResponse};
use crate::ports::outbound::{BomReader, CatalogRepository, ProgressReporter};
use crate::sbom_analysis::services::ViolationReportBuilder;
use crate::shared::Result;
use chrono::{Local, SecondsFormat};
use tracing::{debug, warn};

/// ReportViolationsUseCase - Builds the violations report
///
/// Only the release endpoint is queried. Every row shares one report
/// timestamp taken when the lookups finish.
pub struct ReportViolationsUseCase<B, C, P> {
    bom_reader: B,
    catalog: C,
    progress_reporter: P,
}

impl<B, C, P> ReportViolationsUseCase<B, C, P>
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

    pub fn execute(&self, request: ReportRequest) -> Result<ViolationsResponse> {
        let supported =
            read_supported_purls(&self.bom_reader, &self.progress_reporter, &request.sbom_path)?;

        let project_name = if supported.project_name.is_empty() {
            request.sbom_path.display().to_string()
        } else {
            supported.project_name
        };

        self.progress_reporter
            .report(&format!("Looking up {} release(s)", supported.purls.len()));
        let releases = self.catalog.lookup_releases(&supported.purls, &|done, total| {
            self.progress_reporter
                .report_progress(done, total, Some("releases"))
        });
        self.progress_reporter.report_completion("Release lookup complete");
        debug!("Found {} releases", releases.found.len());
        debug!("{} releases not found", releases.missing.len());

        if releases.has_failures() {
            warn!(
                "{} purl(s) could not be looked up; their violations are not reported",
                releases.failed_purls.len()
            );
        }

        let report_date = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let rows = ViolationReportBuilder::new(project_name.as_str(), report_date)
            .build(&supported.purls, &releases.found);
        debug!("Found {} violations", rows.len());

        Ok(ViolationsResponse {
            project_name,
            rows,
            missing_releases: releases.missing,
            failed_purls: releases.failed_purls,
        })
    }
}
