#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_core::launch(user_service::identity()).await?;
    Ok(())
}
