//! BRD CLI - inspect, vet and summarise the rainfall dashboard documents.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "brd-cli",
    version,
    about = "Bihar rainfall dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: brd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    brd_cmd::run(cli.command).await
}
