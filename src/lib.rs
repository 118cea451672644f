//! # asar2tar
//!
//! A streaming converter from Electron asar archives to tar.
//!
//! An asar archive is a length-prefixed JSON header describing a virtual
//! file tree, followed by the raw bytes of every file back to back. This
//! crate re-exposes such an archive to tar-speaking tools: it parses the
//! preamble, validates the header, and streams each file's bytes straight
//! into tar entries, preserving directory structure, sizes, and the
//! executable permission flag. The whole input is read exactly once and
//! never materialized in memory.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::io::{BufWriter, stdin, stdout};
//!
//! use asar2tar::asar::unpack_to_tar;
//!
//! unpack_to_tar(stdin().lock(), BufWriter::new(stdout().lock()))?;
//! # Ok::<(), asar2tar::Error>(())
//! ```
//!
//! ### Listing without conversion
//!
//! ```no_run
//! use asar2tar::asar::list_contents;
//!
//! let records = list_contents(std::fs::File::open("app.asar")?)?;
//! for record in records {
//!     println!("{} ({} bytes)", record.tar_path(), record.size);
//! }
//! # Ok::<(), asar2tar::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `asar2tar` command-line binary

pub mod asar;
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::asar::{AsarReader, FileRecord, Preamble, list_contents, unpack_to_tar};
    pub use crate::error::{Error, Result};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
