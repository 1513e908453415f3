mod cli;
mod console;
mod infra;
mod routes;
mod server;

use waitlist_admin::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
