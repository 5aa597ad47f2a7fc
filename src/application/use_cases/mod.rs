/// Use cases module containing application business logic orchestration
mod analyze_recommendations;
mod report_violations;
mod supported_purls;

pub use analyze_recommendations::AnalyzeRecommendationsUseCase;
pub use report_violations::ReportViolationsUseCase;
