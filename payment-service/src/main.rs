#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_core::launch(payment_service::identity()).await?;
    Ok(())
}
