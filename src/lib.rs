//! tidelift-sbom-info - Tidelift catalog reports for CycloneDX SBOMs
//!
//! Reads a CycloneDX JSON document, looks up the package URLs of its
//! library components in the Tidelift catalog, and renders either a CSV of
//! recommendations or a JSON array of violations.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_analysis`): purls, catalog records, report rows
//! - **Application Layer** (`application`): the two report use cases
//! - **Ports** (`ports`): interfaces to the SBOM file, the catalog API and the console
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and exit codes
//!
//! # Example
//!
//! ```no_run
//! use tidelift_sbom_info::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = AppConfig::from_environment(None)?;
//! let use_case = AnalyzeRecommendationsUseCase::new(
//!     BomFileReader::new(),
//!     TideliftClient::new(&config)?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(ReportRequest::new("bom.json"))?;
//! let csv = CsvReportFormatter::new().format(&response.rows)?;
//! StdoutPresenter::new().present(&csv)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        BomFileReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvReportFormatter, ViolationsJsonFormatter};
    pub use crate::adapters::outbound::network::TideliftClient;
    pub use crate::application::dto::{RecommendationsResponse, ReportRequest, ViolationsResponse};
    pub use crate::application::use_cases::{
        AnalyzeRecommendationsUseCase, ReportViolationsUseCase,
    };
    pub use crate::config::AppConfig;
    pub use crate::ports::outbound::{
        BomReader, CatalogRepository, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::sbom_analysis::domain::{
        BomComponent, BomDocument, Ecosystem, PackageDetail, Purl, ReleaseDetail, Violation,
        ViolationCategory, ViolationDetails,
    };
    pub use crate::sbom_analysis::services::{
        PurlExtractor, RecommendationReportBuilder, RecommendationRow, ViolationReportBuilder,
        ViolationRow,
    };
    pub use crate::shared::Result;
}
