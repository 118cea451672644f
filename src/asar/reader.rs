//! Asar preamble and header reader

use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};
use serde_json::{Map, Value};
use tracing::debug;

use super::{FileRecord, Preamble, SIZE_MARKER, WORD_SIZE, flatten_tree};
use crate::error::{Error, Result};

/// Sequential reader for the metadata portion of an asar archive.
///
/// Consumes the input strictly front to back: preamble, JSON header,
/// alignment padding. After [`AsarReader::read_header`] (or
/// [`AsarReader::file_records`]) the inner stream is positioned at the
/// first byte of the data region, ready for body copying.
pub struct AsarReader<R: Read> {
    reader: R,
    preamble: Option<Preamble>,
}

impl<R: Read> AsarReader<R> {
    /// Create a new reader over an asar byte stream.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            preamble: None,
        }
    }

    /// Read and cross-check the 16-byte preamble.
    ///
    /// # Errors
    /// Returns [`Error::TruncatedInput`] on a short read and
    /// [`Error::MalformedPreamble`] on any marker or length mismatch.
    pub fn read_preamble(&mut self) -> Result<Preamble> {
        let marker = self.read_u32()?;
        if marker != SIZE_MARKER {
            return Err(Error::MalformedPreamble {
                message: format!("expected size marker {SIZE_MARKER}, found {marker}"),
            });
        }

        let total_header_size = self.read_u32()?;
        let Some(payload_size) = total_header_size.checked_sub(WORD_SIZE) else {
            return Err(Error::MalformedPreamble {
                message: format!("header block size {total_header_size} is smaller than its own length field"),
            });
        };

        // Redundant self-describing length check
        let declared_size = self.read_u32()?;
        if declared_size != payload_size {
            return Err(Error::MalformedPreamble {
                message: format!("inner header size {declared_size} does not match outer size {payload_size}"),
            });
        }

        let header_size = self.read_u32()?;
        let padding_size = payload_size
            .checked_sub(WORD_SIZE)
            .and_then(|rest| rest.checked_sub(header_size))
            .filter(|padding| *padding < WORD_SIZE)
            .ok_or_else(|| Error::MalformedPreamble {
                message: format!("header size {header_size} leaves invalid padding for payload size {payload_size}"),
            })?;

        let preamble = Preamble {
            header_size,
            padding_size,
        };
        self.preamble = Some(preamble);
        Ok(preamble)
    }

    /// Read the JSON header and its alignment padding, returning the root
    /// `files` mapping in document order.
    ///
    /// Reads the preamble first if it has not been read yet.
    ///
    /// # Errors
    /// Returns [`Error::MalformedHeader`] if the payload is not a JSON
    /// object with a `files` object member, or if any padding byte is
    /// non-zero.
    pub fn read_header(&mut self) -> Result<Map<String, Value>> {
        let preamble = match self.preamble {
            Some(preamble) => preamble,
            None => self.read_preamble()?,
        };

        let mut payload = vec![0u8; preamble.header_size as usize];
        self.reader
            .read_exact(&mut payload)
            .map_err(Error::from_read)?;

        let header: Value =
            serde_json::from_slice(&payload).map_err(|e| Error::MalformedHeader {
                message: e.to_string(),
            })?;

        self.read_padding(preamble.padding_size)?;

        debug!(
            header_size = preamble.header_size,
            padding = preamble.padding_size,
            "decoded asar header"
        );

        match header {
            Value::Object(mut root) => match root.remove("files") {
                Some(Value::Object(files)) => Ok(files),
                Some(_) => Err(Error::MalformedHeader {
                    message: "'files' is not an object".to_string(),
                }),
                None => Err(Error::MalformedHeader {
                    message: "missing 'files' object".to_string(),
                }),
            },
            _ => Err(Error::MalformedHeader {
                message: "header is not a JSON object".to_string(),
            }),
        }
    }

    /// Read the flattened file records, sorted by data-region offset.
    ///
    /// Ties on offset keep document order (the sort is stable).
    pub fn file_records(&mut self) -> Result<Vec<FileRecord>> {
        let files = self.read_header()?;
        let mut records = flatten_tree(&files)?;
        records.sort_by_key(|record| record.offset);
        Ok(records)
    }

    /// Consume the reader, returning the inner stream.
    ///
    /// After a successful [`AsarReader::read_header`] the stream is
    /// positioned at the start of the data region.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_padding(&mut self, size: u32) -> Result<()> {
        let mut padding = [0u8; 3];
        let padding = &mut padding[..size as usize];
        self.reader.read_exact(padding).map_err(Error::from_read)?;

        if padding.iter().any(|&byte| byte != 0) {
            return Err(Error::MalformedHeader {
                message: "non-zero header padding".to_string(),
            });
        }
        Ok(())
    }

    fn read_u32(&mut self) -> Result<u32> {
        self.reader
            .read_u32::<LittleEndian>()
            .map_err(Error::from_read)
    }
}
