use tidelift_sbom_info::adapters::outbound::console::StderrProgressReporter;
use tidelift_sbom_info::adapters::outbound::filesystem::BomFileReader;
use tidelift_sbom_info::adapters::outbound::formatters::ViolationsJsonFormatter;
use tidelift_sbom_info::adapters::outbound::network::TideliftClient;
use tidelift_sbom_info::application::dto::ReportRequest;
use tidelift_sbom_info::application::factories::{PresenterFactory, PresenterType};
use tidelift_sbom_info::application::use_cases::ReportViolationsUseCase;
use tidelift_sbom_info::cli::{self, ReporterArgs};
use tidelift_sbom_info::config::AppConfig;
use tidelift_sbom_info::ports::outbound::ReportFormatter;
use tidelift_sbom_info::shared::Result;

fn main() {
    let args: ReporterArgs = cli::parse_or_exit();
    cli::init_logging(args.common.debug);

    if let Err(e) = run(args) {
        cli::exit_with_error(e);
    }
}

fn run(args: ReporterArgs) -> Result<()> {
    let args = args.common;
    let config = AppConfig::from_environment(args.config.as_deref())?;

    let use_case = ReportViolationsUseCase::new(
        BomFileReader::new(),
        TideliftClient::new(&config)?,
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(ReportRequest::new(args.source))?;

    // Pretty for a reader on stdout, compact for files
    let presenter_type = PresenterType::from_output(args.output);
    let mut output = ViolationsJsonFormatter::new(presenter_type.is_stdout()).format(&response.rows)?;
    if presenter_type.is_stdout() {
        output.push('\n');
    }
    PresenterFactory::create(presenter_type).present(&output)?;

    Ok(())
}
