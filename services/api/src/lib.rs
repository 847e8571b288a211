mod cli;
mod demo;
mod infra;
mod render;
mod routes;
mod server;

use fair_chance::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
