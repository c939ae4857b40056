use jcmp_server::{CompareServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = ServerConfig::from_env()?;
    CompareServer::new(config).serve().await?;
    Ok(())
}
