mod bom_file_reader;
mod file_writer;

pub use bom_file_reader::BomFileReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
