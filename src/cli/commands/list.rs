//! CLI command for listing asar contents

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::asar::list_contents;

pub fn execute(input: Option<&Path>, detailed: bool, count: bool) -> anyhow::Result<()> {
    let input: Box<dyn Read> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let records = list_contents(input)?;

    if count {
        println!("{}", records.len());
        return Ok(());
    }

    if detailed {
        println!("{:>6}  {:>10}  {:>10}  PATH", "MODE", "SIZE", "OFFSET");
        for record in &records {
            println!(
                "{:>6o}  {:>10}  {:>10}  {}",
                record.mode(),
                record.size,
                record.offset,
                record.tar_path()
            );
        }

        let total: u64 = records.iter().map(|r| r.size).sum();
        println!();
        println!("{} files, {total} bytes total", records.len());
    } else {
        for record in &records {
            println!("{}", record.tar_path());
        }
    }

    Ok(())
}
