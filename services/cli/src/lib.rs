mod assess;
mod cli;
mod demo;
mod render;

use aethermind::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
