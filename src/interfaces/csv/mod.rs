pub mod amount_reader;
pub mod spelling_writer;
