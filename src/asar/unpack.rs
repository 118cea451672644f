//! Streaming asar to tar conversion

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use super::AsarReader;
use crate::error::{Error, Result};

/// Convert an asar stream into a tar stream.
///
/// The input is read strictly once, front to back; file bodies are copied
/// directly into tar entries without intermediate buffering, so archives
/// larger than memory are fine. The sorted records must tile the data
/// region exactly: the first offset is 0 and each record starts where the
/// previous one ended.
///
/// # Errors
/// Any framing, validation, or layout violation aborts the conversion;
/// output written before the failure is not a valid tar archive.
pub fn unpack_to_tar<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    let mut reader = AsarReader::new(input);
    let records = reader.file_records()?;
    let mut input = reader.into_inner();

    debug!(files = records.len(), "streaming data region into tar");

    let mut builder = tar::Builder::new(output);
    let mut expected_offset = 0u64;

    for record in &records {
        if record.offset != expected_offset {
            return Err(Error::NonContiguousLayout {
                expected: expected_offset,
                found: record.offset,
            });
        }
        expected_offset = record.offset + record.size;

        trace!(path = %record.tar_path(), size = record.size, "tar entry");

        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Regular);
        header.set_size(record.size);
        header.set_mode(record.mode());
        header.set_mtime(0);

        let body = ExactReader {
            inner: &mut input,
            remaining: record.size,
        };
        builder
            .append_data(&mut header, record.tar_path(), body)
            .map_err(Error::from_read)?;
    }

    let mut output = builder.into_inner()?;
    output.flush()?;
    Ok(())
}

/// Reader adapter yielding exactly `remaining` bytes from the inner stream.
///
/// The inner stream ending early surfaces as `UnexpectedEof` instead of a
/// silently short tar body.
struct ExactReader<'a, R> {
    inner: &'a mut R,
    remaining: u64,
}

impl<R: Read> Read for ExactReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let limit = self.remaining.min(buf.len() as u64) as usize;
        let count = self.inner.read(&mut buf[..limit])?;
        if count == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "asar data region ended early",
            ));
        }
        self.remaining -= count as u64;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn asar(json: &str, data: &[u8]) -> Vec<u8> {
        let unpadded = json.len() as u32;
        let padding = (4 - unpadded % 4) % 4;
        let payload = 4 + unpadded + padding;
        let mut bytes = Vec::new();
        for field in [4u32, payload + 4, payload, unpadded] {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        bytes.extend_from_slice(json.as_bytes());
        bytes.resize(bytes.len() + padding as usize, 0);
        bytes.extend_from_slice(data);
        bytes
    }

    fn convert(input: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        unpack_to_tar(Cursor::new(input), &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_single_file() {
        let input = asar(r#"{"files":{"a.txt":{"offset":"0","size":5}}}"#, b"hello");
        let out = convert(&input).unwrap();

        let mut archive = tar::Archive::new(Cursor::new(out));
        let mut entries = archive.entries().unwrap();
        let mut entry = entries.next().unwrap().unwrap();
        assert_eq!(entry.path().unwrap().to_str(), Some("a.txt"));
        assert_eq!(entry.header().mode().unwrap(), 0o644);
        assert_eq!(entry.header().size().unwrap(), 5);
        let mut body = String::new();
        entry.read_to_string(&mut body).unwrap();
        assert_eq!(body, "hello");
        assert!(entries.next().is_none());
    }

    #[test]
    fn test_empty_archive_produces_empty_tar() {
        let input = asar(r#"{"files":{}}"#, b"");
        let out = convert(&input).unwrap();
        let mut archive = tar::Archive::new(Cursor::new(out));
        assert!(archive.entries().unwrap().next().is_none());
    }

    #[test]
    fn test_gap_is_rejected() {
        let input = asar(r#"{"files":{"a":{"offset":"5","size":1}}}"#, b"xxxxxy");
        let err = convert(&input).unwrap_err();
        assert!(matches!(
            err,
            Error::NonContiguousLayout {
                expected: 0,
                found: 5
            }
        ));
    }

    #[test]
    fn test_overlap_is_rejected() {
        let json = r#"{"files":{
            "a":{"offset":"0","size":3},
            "b":{"offset":"2","size":1}
        }}"#;
        let input = asar(json, b"abc");
        let err = convert(&input).unwrap_err();
        assert!(matches!(
            err,
            Error::NonContiguousLayout {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_truncated_data_region() {
        let input = asar(r#"{"files":{"a.txt":{"offset":"0","size":5}}}"#, b"he");
        let err = convert(&input).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput));
    }

    #[test]
    fn test_zero_size_files_share_offset() {
        let json = r#"{"files":{
            "a":{"offset":"0","size":0},
            "b":{"offset":"0","size":0}
        }}"#;
        let input = asar(json, b"");
        let out = convert(&input).unwrap();
        let mut archive = tar::Archive::new(Cursor::new(out));
        let names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| {
                e.unwrap()
                    .path()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, ["a", "b"]);
    }
}
