use service_core::config::ServiceConfig;
use service_core::{Application, ServiceIdentity};
use tokio::sync::oneshot;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub async fn spawn(service_name: &str) -> Self {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            ..ServiceConfig::default()
        };

        let app = Application::build(ServiceIdentity::new(service_name), config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            app.run_until(async {
                rx.await.ok();
            })
            .await
            .ok();
        });

        TestApp {
            address,
            port,
            shutdown: Some(tx),
        }
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        // Give the server a moment to release the port
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}
