/*
[INPUT]:  Error sources (validation, transport, API problem payloads, decoding, config)
[OUTPUT]: Structured error types tagged with the failing operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new operations or error sources
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::types::models::serde_helpers::null_default;

/// Title used when an error body is not a decodable problem payload
pub const UNPARSEABLE_ERROR_TITLE: &str =
    "Failed to unmarshal error body. IAM API failed. Check details for more information.";

/// Boxed error returned by injected transports and signers
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every operation exposed by the client.
///
/// The `Display` form is the coarse sentinel prefixed to every error message,
/// so callers can classify failures without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // API clients
    LockApiClient,
    UnlockApiClient,
    ListApiClients,
    GetApiClient,
    CreateApiClient,
    UpdateApiClient,
    DeleteApiClient,
    ListAccountSwitchKeys,
    // Credentials
    CreateCredential,
    ListCredentials,
    GetCredential,
    UpdateCredential,
    DeleteCredential,
    DeactivateCredential,
    DeactivateCredentials,
    // CIDR blocks and allowlist
    ListCidrBlocks,
    CreateCidrBlock,
    GetCidrBlock,
    UpdateCidrBlock,
    DeleteCidrBlock,
    ValidateCidrBlock,
    DisableIpAllowlist,
    EnableIpAllowlist,
    GetIpAllowlistStatus,
    // Groups
    CreateGroup,
    GetGroup,
    ListGroups,
    RemoveGroup,
    UpdateGroupName,
    MoveGroup,
    ListAffectedUsers,
    // Roles
    CreateRole,
    GetRole,
    UpdateRole,
    DeleteRole,
    ListRoles,
    ListGrantableRoles,
    // Blocked properties
    ListBlockedProperties,
    UpdateBlockedProperties,
    // Users
    CreateUser,
    GetUser,
    ListUsers,
    RemoveUser,
    UpdateUserAuthGrants,
    UpdateUserInfo,
    UpdateUserNotifications,
    UpdateTfa,
    LockUser,
    UnlockUser,
    ResetUserPassword,
    SetUserPassword,
    // Properties
    ListProperties,
    GetProperty,
    ListUsersForProperty,
    MoveProperty,
    BlockUsers,
    MapPropertyIdToName,
    MapPropertyNameToId,
    // Helper
    ListAllowedCpCodes,
    ListAuthorizedUsers,
    ListAllowedApis,
    ListAccessibleGroups,
    // Support
    GetPasswordPolicy,
    ListCountries,
    ListStates,
    ListTimeZones,
    ListContactTypes,
    ListSupportedLanguages,
    ListProducts,
    ListTimeoutPolicies,
}

impl Operation {
    /// Lowercase sentinel naming the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::LockApiClient => "lock api client",
            Operation::UnlockApiClient => "unlock api client",
            Operation::ListApiClients => "list api clients",
            Operation::GetApiClient => "get api client",
            Operation::CreateApiClient => "create api client",
            Operation::UpdateApiClient => "update api client",
            Operation::DeleteApiClient => "delete api client",
            Operation::ListAccountSwitchKeys => "list account switch keys",
            Operation::CreateCredential => "create credential",
            Operation::ListCredentials => "list credentials",
            Operation::GetCredential => "get credential",
            Operation::UpdateCredential => "update credential",
            Operation::DeleteCredential => "delete credential",
            Operation::DeactivateCredential => "deactivate credential",
            Operation::DeactivateCredentials => "deactivate credentials",
            Operation::ListCidrBlocks => "list CIDR blocks",
            Operation::CreateCidrBlock => "create CIDR block",
            Operation::GetCidrBlock => "get CIDR block",
            Operation::UpdateCidrBlock => "update CIDR block",
            Operation::DeleteCidrBlock => "delete CIDR block",
            Operation::ValidateCidrBlock => "validate CIDR block",
            Operation::DisableIpAllowlist => "disable ip allowlist",
            Operation::EnableIpAllowlist => "enable ip allowlist",
            Operation::GetIpAllowlistStatus => "get ip allowlist status",
            Operation::CreateGroup => "create group",
            Operation::GetGroup => "get group",
            Operation::ListGroups => "list groups",
            Operation::RemoveGroup => "remove group",
            Operation::UpdateGroupName => "update group name",
            Operation::MoveGroup => "move group",
            Operation::ListAffectedUsers => "list affected users",
            Operation::CreateRole => "create role",
            Operation::GetRole => "get role",
            Operation::UpdateRole => "update role",
            Operation::DeleteRole => "delete role",
            Operation::ListRoles => "list roles",
            Operation::ListGrantableRoles => "list grantable roles",
            Operation::ListBlockedProperties => "list blocked properties",
            Operation::UpdateBlockedProperties => "update blocked properties",
            Operation::CreateUser => "create user",
            Operation::GetUser => "get user",
            Operation::ListUsers => "list users",
            Operation::RemoveUser => "remove user",
            Operation::UpdateUserAuthGrants => "update user auth grants",
            Operation::UpdateUserInfo => "update user info",
            Operation::UpdateUserNotifications => "update user notifications",
            Operation::UpdateTfa => "update user's two-factor authentication",
            Operation::LockUser => "lock user",
            Operation::UnlockUser => "unlock user",
            Operation::ResetUserPassword => "reset user password",
            Operation::SetUserPassword => "set user password",
            Operation::ListProperties => "list properties",
            Operation::GetProperty => "get property",
            Operation::ListUsersForProperty => "list users for property",
            Operation::MoveProperty => "move property",
            Operation::BlockUsers => "block users",
            Operation::MapPropertyIdToName => "map property by id",
            Operation::MapPropertyNameToId => "map property by name",
            Operation::ListAllowedCpCodes => "list allowed CP codes",
            Operation::ListAuthorizedUsers => "list authorized users",
            Operation::ListAllowedApis => "list allowed APIs",
            Operation::ListAccessibleGroups => "list accessible groups",
            Operation::GetPasswordPolicy => "get password policy",
            Operation::ListCountries => "list countries",
            Operation::ListStates => "list states",
            Operation::ListTimeZones => "list timezones",
            Operation::ListContactTypes => "list contact types",
            Operation::ListSupportedLanguages => "list supported languages",
            Operation::ListProducts => "list products",
            Operation::ListTimeoutPolicies => "list timeout policies",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Problem payload returned by the IAM API for non-success responses
///
/// `status_code` is always the transport status of the response the error was
/// built from. A status reported inside the payload as `httpStatus` is kept
/// separately in `http_status` and never reconciled with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub error_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub detail: String,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "String::is_empty")]
    pub instance: String,
    #[serde(rename = "statusCode", default, skip_serializing_if = "is_zero")]
    pub status_code: u16,
    #[serde(rename = "httpStatus", default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

fn is_zero(value: &u16) -> bool {
    *value == 0
}

impl ApiError {
    /// Build an error from a failed response.
    ///
    /// Never fails: a body that is not a problem payload (HTML, plain text,
    /// truncated JSON) becomes the `detail` under a fixed title.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(mut error) => {
                error.status_code = status;
                error
            }
            Err(err) => {
                warn!(status, error = %err, "IAM error body is not a problem payload");
                ApiError {
                    title: UNPARSEABLE_ERROR_TITLE.to_string(),
                    detail: String::from_utf8_lossy(body).into_owned(),
                    status_code: status,
                    ..Default::default()
                }
            }
        }
    }

    /// Same failure: equal status code and equal rendered message
    pub fn is(&self, other: &ApiError) -> bool {
        self.status_code == other.status_code && self.to_string() == other.to_string()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(rendered) => write!(f, "API error: \n{rendered}"),
            Err(_) => write!(f, "API error: \n{} {}", self.title, self.detail),
        }
    }
}

impl std::error::Error for ApiError {}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for ApiError {}

/// Main error type for IAM client operations
#[derive(Error, Debug)]
pub enum IamError {
    /// Request parameters broke one or more structural rules
    #[error("{operation}: struct validation:\n{report}")]
    Validation { operation: Operation, report: String },

    /// Request body could not be serialized
    #[error("{operation}: failed to create request: {source}")]
    Encode {
        operation: Operation,
        source: serde_json::Error,
    },

    /// Transport could not dispatch the request
    #[error("{operation}: request failed: {source}")]
    Transport { operation: Operation, source: BoxError },

    /// API answered with a status outside the accepted set
    #[error("{operation}: {source}")]
    Api {
        operation: Operation,
        source: ApiError,
    },

    /// Success body did not match the response type
    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: Operation,
        source: serde_json::Error,
    },

    /// Lookup completed but matched nothing
    #[error("{operation}: {message}")]
    NotFound {
        operation: Operation,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl IamError {
    /// Operation the error was raised for, if any
    pub fn operation(&self) -> Option<Operation> {
        match self {
            IamError::Validation { operation, .. }
            | IamError::Encode { operation, .. }
            | IamError::Transport { operation, .. }
            | IamError::Api { operation, .. }
            | IamError::Decode { operation, .. }
            | IamError::NotFound { operation, .. } => Some(*operation),
            IamError::Config(_) | IamError::Http(_) | IamError::UrlParse(_) => None,
        }
    }

    /// Check whether the error came from the given operation
    pub fn is_operation(&self, operation: Operation) -> bool {
        self.operation() == Some(operation)
    }

    /// Problem payload, when the API rejected the request
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            IamError::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Check if the error was detected locally before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, IamError::Validation { .. })
    }
}

impl From<config::ConfigError> for IamError {
    fn from(err: config::ConfigError) -> Self {
        IamError::Config(err.to_string())
    }
}

/// Result type alias for IAM operations
pub type Result<T> = std::result::Result<T, IamError>;
