/// Filesystem adapters for writing the rendered document
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
