/*
[INPUT]:  Method, path, query pairs and optional JSON body for one IAM call
[OUTPUT]: Raw status + body from the remote API
[POS]:    HTTP layer - injectable transport seam and reqwest implementation
[UPDATE]: When changing request encoding or transport options
*/

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use crate::http::client::ClientConfig;
use crate::http::error::{BoxError, Result};
use crate::http::signature::RequestSigner;

/// Fully described IAM request, independent of the HTTP stack
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter only when a value is present
    pub fn query_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Query string with keys sorted, form-urlencoded
    pub fn encoded_query(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.query.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Path plus encoded query, as sent on the wire
    pub fn path_and_query(&self) -> String {
        let query = self.encoded_query();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, query)
        }
    }
}

/// Raw response handed back by a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Executes IAM requests.
///
/// Implementations own connection handling and authentication. Status codes
/// are returned as-is; classification happens in the client.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> std::result::Result<ApiResponse, BoxError>;
}

/// Default transport backed by reqwest
pub struct ReqwestTransport {
    http_client: Client,
    base_url: Url,
    account_switch_key: Option<String>,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url.as_str())
            .field("account_switch_key", &self.account_switch_key)
            .field("signed", &self.signer.is_some())
            .finish()
    }
}

impl ReqwestTransport {
    /// Create a transport with custom configuration
    pub fn with_config(config: &ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            account_switch_key: None,
            signer: None,
        })
    }

    /// Append `accountSwitchKey` to every request
    pub fn with_account_switch_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.account_switch_key = (!key.is_empty()).then_some(key);
        self
    }

    /// Sign every outgoing request
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an API request
    fn url(&self, request: &ApiRequest) -> std::result::Result<Url, url::ParseError> {
        let mut url = self.base_url.join(&request.path)?;
        let mut request = request.clone();
        if let Some(key) = &self.account_switch_key {
            request.query.push(("accountSwitchKey".to_string(), key.clone()));
        }
        let query = request.encoded_query();
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        Ok(url)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> std::result::Result<ApiResponse, BoxError> {
        let url = self.url(&request)?;
        let mut builder = self.http_client.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let mut http_request = builder.build()?;
        if let Some(signer) = &self.signer {
            signer.sign(&mut http_request)?;
        }

        let response = self.http_client.execute(http_request).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "IAM response received");

        Ok(ApiResponse { status, body })
    }
}
