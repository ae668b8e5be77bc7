use payment_service::identity;
use reqwest::Client;
use service_core::config::ServiceConfig;
use service_core::Application;

async fn spawn_app() -> String {
    let config = ServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServiceConfig::default()
    };

    let app = Application::build(identity(), config)
        .await
        .expect("Failed to build test application");
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    address
}

#[tokio::test]
async fn status_identifies_payments() {
    let address = spawn_app().await;

    let response = Client::new()
        .get(&address)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["service"], "payments");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app().await;

    let response = Client::new()
        .get(format!("{}/health", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}
