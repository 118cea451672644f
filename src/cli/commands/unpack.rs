//! CLI command for converting an asar archive to a tar stream

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::asar::unpack_to_tar;

pub fn execute(input: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let input: Box<dyn Read> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    unpack_to_tar(input, output)?;
    Ok(())
}
