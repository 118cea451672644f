//! Asar archive format reader and tar conversion
//!
//! The asar container is a length-prefixed JSON header describing a virtual
//! file tree, followed by the concatenated raw bytes of every file. This
//! module parses the preamble and header, flattens the tree into offset
//! ordered [`FileRecord`]s, and streams the data region into tar entries.

mod lister;
mod reader;
mod tree;
mod types;
mod unpack;

pub use lister::list_contents;
pub use reader::AsarReader;
pub use tree::flatten_tree;
pub use types::{FileRecord, Preamble};
pub use unpack::unpack_to_tar;

/// Value of the fixed first preamble field: the width of the length fields
pub const SIZE_MARKER: u32 = 4;

/// Width in bytes of each preamble length field
pub const WORD_SIZE: u32 = 4;
