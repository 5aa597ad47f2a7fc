use tidelift_sbom_info::adapters::outbound::console::StderrProgressReporter;
use tidelift_sbom_info::adapters::outbound::filesystem::BomFileReader;
use tidelift_sbom_info::adapters::outbound::formatters::CsvReportFormatter;
use tidelift_sbom_info::adapters::outbound::network::TideliftClient;
use tidelift_sbom_info::application::dto::ReportRequest;
use tidelift_sbom_info::application::factories::{PresenterFactory, PresenterType};
use tidelift_sbom_info::application::use_cases::AnalyzeRecommendationsUseCase;
use tidelift_sbom_info::cli::{self, AnalyzerArgs};
use tidelift_sbom_info::config::AppConfig;
use tidelift_sbom_info::ports::outbound::ReportFormatter;
use tidelift_sbom_info::shared::Result;

fn main() {
    let args: AnalyzerArgs = cli::parse_or_exit();
    cli::init_logging(args.common.debug);

    if let Err(e) = run(args) {
        cli::exit_with_error(e);
    }
}

fn run(args: AnalyzerArgs) -> Result<()> {
    let args = args.common;
    let config = AppConfig::from_environment(args.config.as_deref())?;

    let use_case = AnalyzeRecommendationsUseCase::new(
        BomFileReader::new(),
        TideliftClient::new(&config)?,
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(ReportRequest::new(args.source))?;

    let output = CsvReportFormatter::new().format(&response.rows)?;
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&output)?;

    Ok(())
}
