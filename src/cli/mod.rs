//! asar2tar CLI - stream Electron asar archives into tar

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "asar2tar")]
#[command(about = "Convert Electron asar archives to tar streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Run the asar2tar CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the tar stream
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        // Bare invocation is the stdin-to-stdout pipeline
        None => commands::unpack::execute(None, None),
        Some(command) => command.execute(),
    }
}
