mod cli;
mod infra;
mod normalize;
mod routes;
mod server;

use name_normalizer::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
