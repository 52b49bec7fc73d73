use std::sync::Arc;

use tokio::net::TcpListener;

pub mod cli;
use cli::Args;

pub mod engine;
pub mod error;
use error::AppError;

pub mod loaders;
use loaders::csv_loader::CsvLoader;

pub mod model;
pub mod server;

pub async fn run(args: Args) -> Result<(), AppError> {
    log::info!("Loading movies from {}", args.data.display());
    let table = Arc::new(CsvLoader::load_movies_from_csv(&args.data)?);

    let listener = TcpListener::bind(args.bind.as_str()).await?;
    log::info!(
        "Serving recommendations for {} movies on http://{}",
        table.len(),
        listener.local_addr()?
    );

    server::serve(listener, table).await?;

    log::info!("Server stopped");
    Ok(())
}
