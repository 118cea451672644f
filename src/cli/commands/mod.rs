use std::path::PathBuf;

use clap::Subcommand;

pub mod list;
pub mod unpack;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an asar archive to a tar stream
    Unpack {
        /// Source asar file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output tar file (writes stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the files described by an asar header
    List {
        /// Source asar file (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show detailed info (mode, size, offset)
        #[arg(short, long)]
        detailed: bool,

        /// Only show the number of files
        #[arg(short, long)]
        count: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Unpack { input, output } => {
                unpack::execute(input.as_deref(), output.as_deref())
            }
            Commands::List {
                input,
                detailed,
                count,
            } => list::execute(input.as_deref(), *detailed, *count),
        }
    }
}
