//! Types for asar archive handling

/// Validated preamble of an asar archive.
///
/// The preamble is four little-endian u32 fields framing the JSON header:
/// a fixed marker (the width of the length fields themselves), the total
/// header block size, a redundant copy of the block's payload size, and the
/// exact unpadded length of the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble {
    /// Exact byte length of the JSON header before alignment padding
    pub header_size: u32,
    /// Padding bytes after the header, aligning the data region to 4 bytes (0-3)
    pub padding_size: u32,
}

/// A single file in the archive's data region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path segments from the archive root (directory names, then the file name)
    pub path: Vec<String>,
    /// Byte offset into the data region
    pub offset: u64,
    /// Size of the file in bytes
    pub size: u64,
    /// Whether the file carries the executable flag
    pub executable: bool,
}

impl FileRecord {
    /// Archive path with segments joined by `/`, as written to the tar entry.
    #[must_use]
    pub fn tar_path(&self) -> String {
        self.path.join("/")
    }

    /// Unix permission bits for the tar entry.
    #[must_use]
    pub fn mode(&self) -> u32 {
        if self.executable { 0o755 } else { 0o644 }
    }
}
