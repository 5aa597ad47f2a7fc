/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and report data back out to
/// the binaries, keeping the domain layer isolated.
mod report_request;
mod report_response;

pub use report_request::ReportRequest;
pub use report_response::{RecommendationsResponse, ViolationsResponse};
