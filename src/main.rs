use anyhow::Result;
use surefit::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
