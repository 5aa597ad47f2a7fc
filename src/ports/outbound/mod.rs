/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, Tidelift API, console).
pub mod bom_reader;
pub mod catalog_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use bom_reader::BomReader;
pub use catalog_repository::{CatalogRepository, LookupProgressCallback};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
