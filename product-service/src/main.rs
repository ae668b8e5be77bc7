#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_core::launch(product_service::identity()).await?;
    Ok(())
}
