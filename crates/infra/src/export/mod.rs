//! Export sinks

mod file_writer;

pub use file_writer::FileExportWriter;
