//! Input handling: table readers and the raw table model.

mod reader;
mod table;

pub use reader::{content_hash, DelimitedReader, TableFormat, TableReader};
pub use table::{RawCell, RawTable, SourceMetadata};
