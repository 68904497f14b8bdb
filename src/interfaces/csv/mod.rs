pub mod order_reader;
pub mod result_writer;
