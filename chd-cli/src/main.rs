//! CHD CLI - fetch and inspect the county health dashboard's data files.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "chd-cli",
    version,
    about = "US county health data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: chd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    chd_cmd::run(cli.command).await
}
