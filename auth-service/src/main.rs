#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_core::launch(auth_service::identity()).await?;
    Ok(())
}
