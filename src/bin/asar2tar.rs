//! asar2tar binary entry point

fn main() -> anyhow::Result<()> {
    asar2tar::cli::run_cli()
}
