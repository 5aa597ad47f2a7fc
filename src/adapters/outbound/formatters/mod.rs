/// Formatter adapters for the two report formats
mod csv_formatter;
mod violations_json_formatter;

pub use csv_formatter::CsvReportFormatter;
pub use violations_json_formatter::ViolationsJsonFormatter;
