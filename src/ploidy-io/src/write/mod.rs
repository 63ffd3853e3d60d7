mod table_writer;
pub use table_writer::{TableWriter, WriterError, WRITER_SEPARATOR};
