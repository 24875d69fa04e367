use anyhow::Result;
use clap::Parser;
use venue_shows::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    venue_shows::run(cli).await
}
