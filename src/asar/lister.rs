//! Header-only listing of asar contents

use std::io::Read;

use super::{AsarReader, FileRecord};
use crate::error::Result;

/// List the files described by an asar header without touching the data
/// region. Records are returned sorted by data-region offset.
///
/// # Errors
/// Returns an error if the preamble or header cannot be read or validated.
pub fn list_contents<R: Read>(input: R) -> Result<Vec<FileRecord>> {
    AsarReader::new(input).file_records()
}
