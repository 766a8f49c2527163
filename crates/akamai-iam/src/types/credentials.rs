/*
[INPUT]:  IAM API client credential schema definitions and serde requirements
[OUTPUT]: Credential request/response structs with validation rules
[POS]:    Data layer - API client credentials resource
[UPDATE]: When the credentials schema changes
*/

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::CredentialStatus;
use super::models::{ClientId, serde_helpers};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCredentialRequest {
    pub client_id: ClientId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCredentialsRequest {
    pub client_id: ClientId,
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GetCredentialRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub credential_id: i64,
    pub client_id: ClientId,
    pub actions: bool,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateCredentialRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub credential_id: i64,
    pub client_id: ClientId,
    pub body: UpdateCredentialRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialRequestBody {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub expires_on: DateTime<Utc>,
    pub status: CredentialStatus,
}

impl UpdateCredentialRequestBody {
    /// Body as sent on the wire.
    ///
    /// The credentials endpoint rejects an `expiresOn` with no fractional
    /// second, so a whole-second expiry is moved forward by one nanosecond.
    /// Expiries that already carry sub-second precision are left untouched.
    pub fn to_wire(&self) -> Self {
        let mut body = self.clone();
        if body.expires_on.nanosecond() == 0 {
            body.expires_on += Duration::nanoseconds(1);
        }
        body
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct DeleteCredentialRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub credential_id: i64,
    pub client_id: ClientId,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct DeactivateCredentialRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub credential_id: i64,
    pub client_id: ClientId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeactivateCredentialsRequest {
    pub client_id: ClientId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredentialResponse {
    pub client_secret: String,
    pub client_token: String,
    pub created_on: DateTime<Utc>,
    pub credential_id: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub description: String,
    pub expires_on: DateTime<Utc>,
    pub status: CredentialStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub client_token: String,
    pub created_on: DateTime<Utc>,
    pub credential_id: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub description: String,
    pub expires_on: DateTime<Utc>,
    pub status: CredentialStatus,
    #[serde(default)]
    pub max_allowed_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actions: Option<CredentialActions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialActions {
    pub deactivate: bool,
    pub delete: bool,
    pub activate: bool,
    pub edit_description: bool,
    pub edit_expiration: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialResponse {
    pub status: CredentialStatus,
    pub expires_on: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
}
