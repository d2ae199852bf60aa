//! employee-desk - terminal front end for the employees API
//!
//! Run: cargo run -p employee-desk
//! Configure with `EMPLOYEE_API_URL` (default http://localhost:8000) or a `.env` file.

mod config;
mod console;
mod logger;

#[cfg(test)]
#[path = "../../employee-client/tests/common/mod.rs"]
mod test_backend;

use std::io;

use anyhow::Context;
use config::DeskConfig;
use console::Console;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = DeskConfig::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    info!(base_url = %config.client.base_url, "employee-desk starting");

    let mut client = config
        .client
        .build_client()
        .context("Failed to build HTTP client")?;

    let stdin = io::stdin();
    let mut term = Console::new(stdin.lock(), io::stdout());
    console::run(&mut client, &mut term).await?;

    Ok(())
}
