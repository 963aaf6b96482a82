mod cli;
mod demo;
mod evaluate;
mod history;
mod infra;
mod routes;
mod server;

use depot_ops::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
