#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_core::launch(notification_service::identity()).await?;
    Ok(())
}
