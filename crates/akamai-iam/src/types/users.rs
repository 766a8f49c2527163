/*
[INPUT]:  IAM user schema definitions and serde requirements
[OUTPUT]: User, user lock, password and blocked property request/response structs
[POS]:    Data layer - users resource
[UPDATE]: When the users schema changes
*/

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationErrors};

use super::enums::TfaAction;
use super::models::serde_helpers;
use crate::validation::{BLANK, violation};

/// Profile fields shared by create, get and basic-info update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserBasicInfo {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "uiUserName", skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_zone: String,
    pub job_title: String,
    #[serde(rename = "tfaEnabled")]
    pub tfa_enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secondary_email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mobile_phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zip_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub contact_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub preferred_language: String,
    #[serde(rename = "sessionTimeOut", skip_serializing_if = "Option::is_none")]
    pub session_time_out: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthGrantRequest {
    pub group_id: i64,
    pub is_blocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(rename = "subGroups", default, skip_serializing_if = "Vec::is_empty")]
    pub subgroups: Vec<AuthGrantRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthGrant {
    pub group_id: i64,
    pub group_name: String,
    pub is_blocked: bool,
    pub role_description: String,
    pub role_id: Option<i64>,
    pub role_name: String,
    #[serde(
        rename = "subGroups",
        deserialize_with = "serde_helpers::null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subgroups: Vec<AuthGrant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserNotifications {
    #[serde(rename = "enableEmailNotifications")]
    pub enable_email: bool,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub options: UserNotificationOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserNotificationOptions {
    #[serde(rename = "newUserNotification")]
    pub new_user: bool,
    pub password_expiry: bool,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub proactive: Vec<String>,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub upgrade: Vec<String>,
}

/// Create user body plus the `sendEmail` query flag
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(flatten)]
    pub user: UserBasicInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auth_grants: Vec<AuthGrantRequest>,
    pub notifications: Option<UserNotifications>,
    #[serde(skip)]
    pub send_email: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUsersRequest {
    pub group_id: Option<i64>,
    pub auth_grants: bool,
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GetUserRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    pub actions: bool,
    pub auth_grants: bool,
    pub notifications: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserInfoRequest {
    pub identity_id: String,
    pub user: UserBasicInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateUserNotificationsRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    pub notifications: UserNotifications,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateUserAuthGrantsRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub auth_grants: Vec<AuthGrantRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RemoveUserRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateTfaRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    pub action: TfaAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(flatten)]
    pub user: UserBasicInfo,
    #[serde(rename = "uiIdentityId")]
    pub identity_id: String,
    pub is_locked: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_login_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password_expiry_date: String,
    #[serde(rename = "tfaConfigured")]
    pub tfa_configured: bool,
    pub email_update_pending: bool,
    #[serde(deserialize_with = "serde_helpers::null_default", skip_serializing_if = "Vec::is_empty")]
    pub auth_grants: Vec<AuthGrant>,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub notifications: UserNotifications,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserListItem {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "uiUserName", skip_serializing_if = "String::is_empty")]
    pub user_name: String,
    pub email: String,
    #[serde(rename = "tfaEnabled")]
    pub tfa_enabled: bool,
    #[serde(rename = "uiIdentityId")]
    pub identity_id: String,
    pub is_locked: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_login_date: String,
    #[serde(rename = "tfaConfigured")]
    pub tfa_configured: bool,
    pub account_id: String,
    pub actions: Option<UserActions>,
    #[serde(deserialize_with = "serde_helpers::null_default", skip_serializing_if = "Vec::is_empty")]
    pub auth_grants: Vec<AuthGrant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActions {
    pub api_client: bool,
    pub delete: bool,
    pub edit: bool,
    pub is_cloneable: bool,
    pub reset_password: bool,
    pub third_party_access: bool,
    #[serde(rename = "canEditTFA")]
    pub can_edit_tfa: bool,
    pub edit_profile: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LockUserRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UnlockUserRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ResetUserPasswordRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    pub send_email: bool,
}

/// Reset result; `new_password` is only present when no email was sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetUserPasswordResponse {
    #[serde(default)]
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct SetUserPasswordRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub new_password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewPasswordBody<'a> {
    pub new_password: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ListBlockedPropertiesRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateBlockedPropertiesRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
    pub properties: Vec<i64>,
}

// Profile fields required per operation, one violation per missing field

fn require(errors: &mut ValidationErrors, field: &'static str, blank: bool) {
    if blank {
        errors.add(field, violation("required", BLANK));
    }
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let user = &self.user;
        let mut errors = ValidationErrors::new();
        require(&mut errors, "country", user.country.is_empty());
        require(&mut errors, "email", user.email.is_empty());
        require(&mut errors, "first_name", user.first_name.is_empty());
        require(&mut errors, "last_name", user.last_name.is_empty());
        require(&mut errors, "auth_grants", self.auth_grants.is_empty());
        require(&mut errors, "notifications", self.notifications.is_none());
        if !user.email.is_empty() && !user.email.validate_email() {
            errors.add("email", violation("email", "must be a valid email address"));
        }
        into_result(errors)
    }
}

impl Validate for UpdateUserInfoRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let user = &self.user;
        let mut errors = ValidationErrors::new();
        require(&mut errors, "identity_id", self.identity_id.is_empty());
        require(&mut errors, "first_name", user.first_name.is_empty());
        require(&mut errors, "last_name", user.last_name.is_empty());
        require(&mut errors, "country", user.country.is_empty());
        require(&mut errors, "time_zone", user.time_zone.is_empty());
        require(&mut errors, "preferred_language", user.preferred_language.is_empty());
        require(&mut errors, "session_time_out", user.session_time_out.is_none());
        into_result(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::render_errors;

    #[test]
    fn test_create_user_reports_every_missing_field() {
        let report = render_errors(&CreateUserRequest::default().validate().unwrap_err());

        assert_eq!(
            report,
            "auth_grants: cannot be blank\n\
             country: cannot be blank\n\
             email: cannot be blank\n\
             first_name: cannot be blank\n\
             last_name: cannot be blank\n\
             notifications: cannot be blank"
        );
    }

    #[test]
    fn test_update_info_reports_one_line_per_field() {
        let request = UpdateUserInfoRequest {
            identity_id: "1-ABCDE".to_string(),
            user: UserBasicInfo {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                country: "USA".to_string(),
                ..Default::default()
            },
        };

        let report = render_errors(&request.validate().unwrap_err());
        assert_eq!(
            report,
            "preferred_language: cannot be blank\nsession_time_out: cannot be blank\ntime_zone: cannot be blank"
        );
        assert!(!report.contains(';'));
    }

    #[test]
    fn test_user_tolerates_null_lists() {
        let user: User = serde_json::from_str(
            r#"{
                "uiIdentityId": "A-BC-1234567",
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@mycompany.com",
                "country": "USA",
                "authGrants": [
                    {"groupId": 1, "groupName": "A", "isBlocked": false, "roleId": 1, "subGroups": null}
                ],
                "notifications": {
                    "enableEmailNotifications": false,
                    "options": {
                        "newUserNotification": false,
                        "passwordExpiry": false,
                        "proactive": null,
                        "upgrade": null
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(user.identity_id, "A-BC-1234567");
        assert!(user.auth_grants[0].subgroups.is_empty());
        assert!(user.notifications.options.proactive.is_empty());
        assert!(user.notifications.options.upgrade.is_empty());

        let bare: User = serde_json::from_str(
            r#"{"uiIdentityId": "A-BC-1234567", "authGrants": null, "notifications": null}"#,
        )
        .unwrap();
        assert!(bare.auth_grants.is_empty());
        assert_eq!(bare.notifications, UserNotifications::default());
    }

    #[test]
    fn test_create_user_rejects_bad_email() {
        let request = CreateUserRequest {
            user: UserBasicInfo {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john.doe.example.com".to_string(),
                country: "USA".to_string(),
                ..Default::default()
            },
            auth_grants: vec![AuthGrantRequest {
                group_id: 1,
                role_id: Some(1),
                ..Default::default()
            }],
            notifications: Some(UserNotifications::default()),
            send_email: false,
        };

        let report = render_errors(&request.validate().unwrap_err());
        assert_eq!(report, "email: must be a valid email address");
    }

    #[test]
    fn test_update_info_requires_profile_fields() {
        let request = UpdateUserInfoRequest {
            identity_id: "1-ABCDE".to_string(),
            user: UserBasicInfo::default(),
        };
        let report = render_errors(&request.validate().unwrap_err());
        assert!(report.contains("session_time_out: cannot be blank"));
        assert!(report.contains("time_zone: cannot be blank"));
    }

    #[test]
    fn test_create_body_is_flat() {
        let request = CreateUserRequest {
            user: UserBasicInfo {
                first_name: "John".to_string(),
                country: "USA".to_string(),
                ..Default::default()
            },
            notifications: Some(UserNotifications::default()),
            send_email: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["firstName"], "John");
        assert_eq!(value["tfaEnabled"], false);
        assert!(value.get("sendEmail").is_none());
        assert!(value.get("authGrants").is_none());
        assert_eq!(value["notifications"]["options"]["newUserNotification"], false);
    }
}
