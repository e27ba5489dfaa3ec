/*
 * Responsibility
 * - tokio runtime entrypoint
 * - call app::run() (no logic here)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    memories_api::app::run().await
}
