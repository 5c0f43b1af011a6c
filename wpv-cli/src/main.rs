//! wpv-cli - Command line access to the article query form's core.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wpv-cli",
    version,
    about = "Article query form toolkit: week defaults, validation, geolocation"
)]
struct Cli {
    #[command(subcommand)]
    command: wpv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting wpv-cli");
    wpv_cmd::run(cli.command).await
}
