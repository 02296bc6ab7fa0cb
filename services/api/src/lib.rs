mod cli;
mod infra;
mod report;
mod routes;
mod server;
mod views;

use risk_assessment::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
