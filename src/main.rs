use clap::Parser;

use genrerecs::cli::Args;

mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    genrerecs::run(Args::parse()).await?;

    Ok(())
}
