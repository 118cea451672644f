//! File-tree flattening and validation

use serde_json::{Map, Value};

use super::FileRecord;
use crate::error::{Error, Result};

/// Flatten the nested `files` mapping into file records.
///
/// Records come out in document order; callers impose offset order. A node
/// carrying a `files` member is a directory and contributes no record of
/// its own; anything else must be a file descriptor with a digit-string
/// `offset`, a non-negative integer `size`, and an optional boolean
/// `executable`.
pub fn flatten_tree(files: &Map<String, Value>) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();
    flatten_level(files, &mut Vec::new(), &mut records)?;
    Ok(records)
}

fn flatten_level(
    files: &Map<String, Value>,
    prefix: &mut Vec<String>,
    records: &mut Vec<FileRecord>,
) -> Result<()> {
    for (name, entry) in files {
        validate_segment(name)?;

        match entry.get("files") {
            Some(Value::Object(children)) => {
                prefix.push(name.clone());
                flatten_level(children, prefix, records)?;
                prefix.pop();
            }
            Some(_) => {
                return Err(malformed(prefix, name, "'files' is not an object"));
            }
            None => records.push(file_record(prefix, name, entry)?),
        }
    }
    Ok(())
}

/// Reject names that would escape the archive root or mangle tar paths.
fn validate_segment(name: &str) -> Result<()> {
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        return Err(Error::UnsafePath {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn file_record(prefix: &[String], name: &str, entry: &Value) -> Result<FileRecord> {
    let offset = match entry.get("offset") {
        Some(Value::String(raw)) => raw.parse::<u64>().map_err(|_| {
            malformed(
                prefix,
                name,
                &format!("offset {raw:?} is not a non-negative integer"),
            )
        })?,
        Some(_) => return Err(malformed(prefix, name, "offset is not a string")),
        None => return Err(malformed(prefix, name, "missing offset")),
    };

    let size = match entry.get("size") {
        Some(value) => value.as_u64().ok_or_else(|| {
            malformed(
                prefix,
                name,
                &format!("size {value} is not a non-negative integer"),
            )
        })?,
        None => return Err(malformed(prefix, name, "missing size")),
    };

    let executable = match entry.get("executable") {
        None => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(malformed(prefix, name, "executable is not a boolean")),
    };

    let mut path = prefix.to_vec();
    path.push(name.to_string());

    Ok(FileRecord {
        path,
        offset,
        size,
        executable,
    })
}

fn malformed(prefix: &[String], name: &str, message: &str) -> Error {
    let mut path = prefix.join("/");
    if !path.is_empty() {
        path.push('/');
    }
    path.push_str(name);
    Error::MalformedEntry {
        path,
        message: message.to_string(),
    }
}
