/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for akamai-iam tests

use std::sync::{Arc, Mutex, Once};

use akamai_iam::http::BoxError;
use akamai_iam::{ApiRequest, ApiResponse, ClientConfig, IamClient, IamConfig, Transport};
use async_trait::async_trait;
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    init_tracing();
    MockServer::start().await
}

/// Client talking to a mock server
pub fn mock_client(server: &MockServer) -> IamClient {
    IamClient::with_config(ClientConfig::default(), &server.uri()).expect("client init")
}

/// Configuration pointing at a mock server
#[allow(dead_code)]
pub fn mock_config(server: &MockServer, account_key: Option<&str>) -> IamConfig {
    IamConfig {
        host: server.uri(),
        client_token: "akab-client-token".to_string(),
        client_secret: "akab-client-secret".to_string(),
        access_token: "akab-access-token".to_string(),
        account_key: account_key.map(str::to_string),
        timeout_secs: Some(5),
        connect_timeout_secs: Some(5),
    }
}

/// Transport that records requests and replays one canned response
#[allow(dead_code)]
pub struct RecordingTransport {
    pub status: u16,
    pub body: String,
    pub requests: Mutex<Vec<ApiRequest>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BoxError> {
        self.requests.lock().expect("requests lock").push(request);
        Ok(ApiResponse {
            status: self.status,
            body: self.body.clone().into_bytes(),
        })
    }
}
