mod cli;
mod console;
mod infra;
mod routes;
mod server;

use portfolio_pricing::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
