/*
[INPUT]:  Outgoing reqwest request
[OUTPUT]: Request carrying authentication headers
[POS]:    HTTP layer - request signing seam for authenticated endpoints
[UPDATE]: When changing signer contract
*/

use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::http::error::BoxError;

/// Signs outgoing requests before dispatch.
///
/// EdgeGrid signing lives outside this crate; implement this trait to plug it
/// into [`ReqwestTransport`](crate::http::ReqwestTransport).
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError>;
}

/// Signer that sets a fixed `Authorization` header
#[derive(Debug, Clone)]
pub struct StaticAuthorization {
    value: HeaderValue,
}

impl StaticAuthorization {
    pub fn new(value: &str) -> Result<Self, BoxError> {
        let mut value = HeaderValue::from_str(value)?;
        value.set_sensitive(true);
        Ok(Self { value })
    }
}

impl RequestSigner for StaticAuthorization {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), BoxError> {
        request.headers_mut().insert(AUTHORIZATION, self.value.clone());
        Ok(())
    }
}
