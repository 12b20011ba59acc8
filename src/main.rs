use anyhow::anyhow;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    company_scout::logger::init().map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    company_scout::cli::main().await
}
