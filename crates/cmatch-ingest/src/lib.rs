pub mod reader;
pub mod sniff;
pub mod writer;

pub use reader::{check_input, read_table, sniff_file};
pub use sniff::{Dialect, SAMPLE_BYTES, sniff_dialect};
pub use writer::{check_output, write_table};
