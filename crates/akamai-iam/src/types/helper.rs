/*
[INPUT]:  IAM user-lookup helper schema definitions and serde requirements
[OUTPUT]: Allowed CP codes / APIs, authorized users and accessible groups structs
[POS]:    Data layer - helper resource
[UPDATE]: When the helper schema changes
*/

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::enums::{AccessLevel, ClientType};
use super::models::serde_helpers;
use crate::validation::violation;

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ListAllowedCpCodesRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub user_name: String,
    #[validate(nested)]
    pub body: ListAllowedCpCodesRequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_cpcode_groups", skip_on_field_errors = false))]
pub struct ListAllowedCpCodesRequestBody {
    pub client_type: ClientType,
    #[serde(default)]
    pub groups: Vec<AllowedCpCodesGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllowedCpCodesGroup {
    #[serde(skip_serializing_if = "is_zero")]
    pub group_id: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub role_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group_name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_blocked: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub parent_group_id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub role_name: String,
    #[serde(deserialize_with = "serde_helpers::null_default", skip_serializing_if = "Vec::is_empty")]
    pub sub_groups: Vec<AllowedCpCodesGroup>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowedCpCode {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizedUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "uiIdentityId")]
    pub identity_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ListAllowedApisRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub user_name: String,
    pub client_type: Option<ClientType>,
    pub allow_account_switch: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedApi {
    #[serde(default)]
    pub access_levels: Vec<AccessLevel>,
    pub api_id: i64,
    pub api_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation_url: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub has_access: bool,
    #[serde(default)]
    pub service_provider_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ListAccessibleGroupsRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub user_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibleGroup {
    pub group_id: i64,
    pub role_id: i64,
    pub group_name: String,
    pub role_name: String,
    pub is_blocked: bool,
    pub role_description: String,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub sub_groups: Vec<AccessibleSubGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibleSubGroup {
    pub group_id: i64,
    pub group_name: String,
    pub parent_group_id: i64,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub sub_groups: Vec<AccessibleSubGroup>,
}

fn validate_cpcode_groups(body: &ListAllowedCpCodesRequestBody) -> Result<(), ValidationError> {
    if body.client_type == ClientType::ServiceAccount && body.groups.is_empty() {
        return Err(violation(
            "groups",
            "groups: required when client_type is SERVICE_ACCOUNT",
        ));
    }
    Ok(())
}
