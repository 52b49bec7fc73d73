use clap::Parser;
use std::path::PathBuf;

/// Recommend movies from a CSV dataset by genre, through a small web form
#[derive(Parser, Debug, Clone)]
#[command(name = "genrerecs")]
#[command(version)]
pub struct Args {
    /// CSV file with title, rating, year, genres and description columns
    #[arg(long, env = "GENRERECS_DATA", default_value = "movies.csv")]
    pub data: PathBuf,

    /// Address the web form is served on
    #[arg(long, env = "GENRERECS_BIND", default_value = "127.0.0.1:5000")]
    pub bind: String,
}
