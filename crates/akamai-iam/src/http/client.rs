/*
[INPUT]:  Injected transport (or HTTP configuration to build one)
[OUTPUT]: IamClient executing validated requests and classifying responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing status handling
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use validator::Validate;

use crate::config::IamConfig;
use crate::http::error::{ApiError, IamError, Operation, Result};
use crate::http::signature::RequestSigner;
use crate::http::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
use crate::validation::render_errors;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main client for the IAM API.
///
/// Cheap to clone; all clones share the injected transport.
#[derive(Clone)]
pub struct IamClient {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for IamClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamClient").finish_non_exhaustive()
    }
}

impl IamClient {
    /// Create a client on top of an injected transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a reqwest-backed client against `base_url`
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::with_config(&config, base_url)?;
        Ok(Self::new(Arc::new(transport)))
    }

    /// Create a reqwest-backed client from loaded configuration
    pub fn from_config(config: &IamConfig, signer: Option<Arc<dyn RequestSigner>>) -> Result<Self> {
        let mut transport = ReqwestTransport::with_config(&config.client_config(), &config.base_url())?;
        if let Some(key) = &config.account_key {
            transport = transport.with_account_switch_key(key.clone());
        }
        if let Some(signer) = signer {
            transport = transport.with_signer(signer);
        }
        Ok(Self::new(Arc::new(transport)))
    }

    /// Run structural validation, reporting every violation at once
    pub(crate) fn validate<V: Validate>(&self, operation: Operation, params: &V) -> Result<()> {
        params.validate().map_err(|errors| IamError::Validation {
            operation,
            report: render_errors(&errors),
        })
    }

    /// Serialize a request body
    pub(crate) fn body<B: Serialize>(&self, operation: Operation, body: &B) -> Result<Value> {
        serde_json::to_value(body).map_err(|source| IamError::Encode { operation, source })
    }

    /// Dispatch a request and return the raw response if its status is accepted
    async fn dispatch(
        &self,
        operation: Operation,
        request: ApiRequest,
        accepted: &[u16],
    ) -> Result<ApiResponse> {
        debug!(
            operation = %operation,
            method = %request.method,
            path = %request.path_and_query(),
            "dispatching IAM request"
        );

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|source| IamError::Transport { operation, source })?;

        if !accepted.contains(&response.status) {
            return Err(IamError::Api {
                operation,
                source: ApiError::from_response(response.status, &response.body),
            });
        }

        Ok(response)
    }

    /// Dispatch and decode a JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: ApiRequest,
        accepted: &[u16],
    ) -> Result<T> {
        let response = self.dispatch(operation, request, accepted).await?;
        serde_json::from_slice(&response.body).map_err(|source| IamError::Decode { operation, source })
    }

    /// Dispatch and decode a JSON body, using the default value when the
    /// response carries none (e.g. 204)
    pub(crate) async fn send_json_or_default<T: DeserializeOwned + Default>(
        &self,
        operation: Operation,
        request: ApiRequest,
        accepted: &[u16],
    ) -> Result<T> {
        let response = self.dispatch(operation, request, accepted).await?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }
        serde_json::from_slice(&response.body).map_err(|source| IamError::Decode { operation, source })
    }

    /// Dispatch and discard the body
    pub(crate) async fn send_empty(
        &self,
        operation: Operation,
        request: ApiRequest,
        accepted: &[u16],
    ) -> Result<()> {
        self.dispatch(operation, request, accepted).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::error::BoxError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport returning a canned response and recording requests
    struct CannedTransport {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<ApiRequest>>,
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn execute(&self, request: ApiRequest) -> std::result::Result<ApiResponse, BoxError> {
            self.seen.lock().unwrap().push(request);
            Ok(ApiResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn execute(&self, _request: ApiRequest) -> std::result::Result<ApiResponse, BoxError> {
            Err("connection refused".into())
        }
    }

    fn canned(status: u16, body: &'static str) -> (IamClient, Arc<CannedTransport>) {
        let transport = Arc::new(CannedTransport {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        });
        (IamClient::new(transport.clone()), transport)
    }

    #[tokio::test]
    async fn test_unexpected_success_status_is_failure() {
        let (client, _) = canned(200, "{}");
        let err = client
            .send_empty(Operation::RemoveGroup, ApiRequest::delete("/x"), &[204])
            .await
            .unwrap_err();

        let api = err.api_error().expect("api error");
        assert_eq!(api.status_code, 200);
    }

    #[tokio::test]
    async fn test_transport_failure_is_wrapped() {
        let client = IamClient::new(Arc::new(FailingTransport));
        let err = client
            .send_empty(Operation::LockUser, ApiRequest::post("/lock"), &[200, 204])
            .await
            .unwrap_err();

        assert!(matches!(err, IamError::Transport { .. }));
        assert_eq!(err.to_string(), "lock user: request failed: connection refused");
    }

    #[tokio::test]
    async fn test_decode_failure_on_success_body() {
        let (client, _) = canned(200, "not json");
        let err = client
            .send_json::<Vec<String>>(Operation::ListCountries, ApiRequest::get("/c"), &[200])
            .await
            .unwrap_err();

        assert!(matches!(err, IamError::Decode { .. }));
        assert!(err.is_operation(Operation::ListCountries));
    }

    #[tokio::test]
    async fn test_empty_body_yields_default() {
        let (client, transport) = canned(204, "");
        let value: Option<String> = client
            .send_json_or_default(Operation::ResetUserPassword, ApiRequest::post("/r"), &[200, 204])
            .await
            .unwrap();

        assert_eq!(value, None);
        assert_eq!(transport.seen.lock().unwrap().len(), 1);
    }
}
