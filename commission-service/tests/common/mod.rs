//! Test helper module for commission-service integration tests.

#![allow(dead_code)]

use commission_service::config::{CommissionServiceConfig, CommonConfig};
use commission_service::services::init_metrics;
use commission_service::startup::Application;

/// Test application wrapper for integration tests.
pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn a new test application on a random port.
    pub async fn spawn() -> Self {
        // Required for the metrics endpoint test; idempotent across tests.
        init_metrics();

        let config = CommissionServiceConfig {
            common: CommonConfig { port: 0 },
            service_name: "commission-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(app.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    pub fn api(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}
