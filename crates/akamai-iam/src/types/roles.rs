/*
[INPUT]:  IAM role schema definitions and serde requirements
[OUTPUT]: Role request/response structs with validation rules
[POS]:    Data layer - roles resource
[UPDATE]: When the roles schema changes
*/

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::RoleType;
use super::models::serde_helpers;

/// Role body; empty fields are left out so updates touch only what is set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role_description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub granted_roles: Vec<GrantedRoleId>,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub name: String,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub description: String,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub granted_roles: Vec<GrantedRoleId>,
}

impl CreateRoleRequest {
    pub(crate) fn body(&self) -> RoleRequest {
        RoleRequest {
            role_name: self.name.clone(),
            role_description: self.description.clone(),
            granted_roles: self.granted_roles.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantedRoleId {
    #[serde(rename = "grantedRoleId")]
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GetRoleRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub id: i64,
    pub actions: bool,
    pub granted_roles: bool,
    pub users: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateRoleRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub id: i64,
    pub role: RoleRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct DeleteRoleRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListRolesRequest {
    pub group_id: Option<i64>,
    pub actions: bool,
    pub ignore_context: bool,
    pub users: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: i64,
    pub role_name: String,
    #[serde(default)]
    pub role_description: String,
    #[serde(rename = "type")]
    pub role_type: RoleType,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub modified_date: String,
    #[serde(default)]
    pub modified_by: String,
    #[serde(default)]
    pub actions: Option<RoleAction>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub granted_roles: Vec<RoleGrantedRole>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub users: Vec<RoleUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleAction {
    pub delete: bool,
    pub edit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleGrantedRole {
    #[serde(rename = "grantedRoleId")]
    pub role_id: i64,
    #[serde(rename = "grantedRoleName")]
    pub role_name: String,
    #[serde(rename = "grantedRoleDescription", skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleUser {
    #[serde(rename = "uiIdentityId")]
    pub identity_id: String,
    pub first_name: String,
    pub last_name: String,
    pub account_id: String,
    pub email: String,
    pub last_login_date: String,
}
