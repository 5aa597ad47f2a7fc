/// Mock implementations for testing
mod mock_bom_reader;
mod mock_catalog_repository;
mod mock_progress_reporter;

pub use mock_bom_reader::{library, MockBomReader};
pub use mock_catalog_repository::MockCatalogRepository;
pub use mock_progress_reporter::MockProgressReporter;
