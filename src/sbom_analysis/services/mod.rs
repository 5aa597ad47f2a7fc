/// Domain services - pure report-building logic
pub mod purl_extractor;
pub mod recommendation_report;
pub mod violation_report;

pub use purl_extractor::{PurlExtractor, SkipReason};
pub use recommendation_report::{
    RecommendationReportBuilder, RecommendationRow, RECOMMENDATION_HEADER,
};
pub use violation_report::{ActionStatus, ViolationReportBuilder, ViolationRow};
