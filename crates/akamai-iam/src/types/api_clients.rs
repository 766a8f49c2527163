/*
[INPUT]:  IAM API client schema definitions and serde requirements
[OUTPUT]: API client request/response structs with validation rules
[POS]:    Data layer - API clients resource
[UPDATE]: When the API clients schema changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::credentials::CredentialActions;
use super::enums::{AccessLevel, ClientType, CredentialStatus};
use super::models::{ClientId, serde_helpers};
use crate::validation::{one_of, validate_cidr_list, violation};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockApiClientRequest {
    pub client_id: ClientId,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UnlockApiClientRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub client_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListApiClientsRequest {
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetApiClientRequest {
    pub client_id: ClientId,
    pub actions: bool,
    pub group_access: bool,
    pub api_access: bool,
    pub credentials: bool,
    pub ip_acl: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteApiClientRequest {
    pub client_id: ClientId,
}

/// Fields shared by the create and update bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApiClientBody {
    pub allow_account_switch: bool,
    #[validate(nested)]
    pub api_access: ApiAccess,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub authorized_users: Vec<String>,
    pub can_auto_create_credential: bool,
    pub client_description: String,
    pub client_name: String,
    #[validate(custom(function = "validate_client_type"))]
    pub client_type: ClientType,
    #[validate(nested)]
    pub group_access: GroupAccess,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub ip_acl: Option<IpAcl>,
    pub notification_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub purge_options: Option<PurgeOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiClientRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub client: ApiClientBody,
    pub create_credential: bool,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateApiClientRequest {
    pub client_id: ClientId,
    #[validate(nested)]
    pub body: ApiClientBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_api_access", skip_on_field_errors = false))]
pub struct ApiAccess {
    pub all_accessible_apis: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    #[validate(nested)]
    pub apis: Vec<Api>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    #[validate(custom(function = "validate_access_level"))]
    pub access_level: AccessLevel,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub api_id: i64,
    #[serde(default)]
    pub api_name: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub description: String,
    #[serde(default)]
    pub documentation_url: String,
    #[serde(rename = "endPoint", default)]
    pub endpoint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_group_access", skip_on_field_errors = false))]
pub struct GroupAccess {
    pub clone_authorized_user_groups: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    #[validate(nested)]
    pub groups: Vec<ClientGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientGroup {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
    pub group_name: String,
    pub is_blocked: bool,
    pub parent_group_id: i64,
    pub role_description: String,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub role_id: i64,
    pub role_name: String,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub subgroups: Vec<ClientGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IpAcl {
    #[serde(deserialize_with = "serde_helpers::null_default")]
    #[validate(custom(function = "validate_cidr_list"))]
    pub cidr: Vec<String>,
    pub enable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PurgeOptions {
    pub can_purge_by_cache_tag: bool,
    pub can_purge_by_cpcode: bool,
    #[validate(nested)]
    pub cpcode_access: CpCodeAccess,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_cpcode_access", skip_on_field_errors = false))]
pub struct CpCodeAccess {
    pub all_current_and_new_cpcodes: bool,
    pub cpcodes: Option<Vec<i64>>,
}

/// API client as returned by lock and unlock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClient {
    pub access_token: String,
    pub active_credential_count: i64,
    pub allow_account_switch: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub authorized_users: Vec<String>,
    pub can_auto_create_credential: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub client_description: String,
    pub client_id: String,
    pub client_name: String,
    pub client_type: ClientType,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub is_locked: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub notification_emails: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub service_consumer_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApiClientsItem {
    pub access_token: String,
    #[serde(default)]
    pub actions: Option<ListApiClientsActions>,
    pub active_credential_count: i64,
    pub allow_account_switch: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub authorized_users: Vec<String>,
    pub can_auto_create_credential: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub client_description: String,
    pub client_id: String,
    pub client_name: String,
    pub client_type: ClientType,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub is_locked: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub notification_emails: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub service_consumer_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListApiClientsActions {
    pub delete: bool,
    pub deactivate_all: bool,
    pub edit: bool,
    pub lock: bool,
    pub transfer: bool,
    pub unlock: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiClientActions {
    pub delete: bool,
    pub deactivate_all: bool,
    pub edit: bool,
    pub edit_apis: bool,
    pub edit_auth: bool,
    pub edit_groups: bool,
    pub edit_ip_acl: bool,
    pub edit_switch_account: bool,
    pub lock: bool,
    pub transfer: bool,
    pub unlock: bool,
}

/// Full API client as returned by get and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClientDetails {
    pub access_token: String,
    #[serde(default)]
    pub actions: Option<ApiClientActions>,
    pub active_credential_count: i64,
    pub allow_account_switch: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub api_access: ApiAccess,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub authorized_users: Vec<String>,
    #[serde(rename = "baseURL", default)]
    pub base_url: String,
    pub can_auto_create_credential: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub client_description: String,
    pub client_id: String,
    pub client_name: String,
    pub client_type: ClientType,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub credentials: Vec<ApiClientCredential>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub group_access: GroupAccess,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub ip_acl: IpAcl,
    pub is_locked: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub notification_emails: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub purge_options: PurgeOptions,
    #[serde(default)]
    pub service_provider_id: i64,
}

/// API client as returned by create, including the one-time secret
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiClientResponse {
    pub access_token: String,
    #[serde(default)]
    pub actions: Option<ApiClientActions>,
    pub active_credential_count: i64,
    pub allow_account_switch: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub api_access: ApiAccess,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub authorized_users: Vec<String>,
    #[serde(rename = "baseURL", default)]
    pub base_url: String,
    pub can_auto_create_credential: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub client_description: String,
    pub client_id: String,
    pub client_name: String,
    pub client_type: ClientType,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub credentials: Vec<CreateApiClientCredential>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub group_access: GroupAccess,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub ip_acl: IpAcl,
    pub is_locked: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub notification_emails: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub purge_options: PurgeOptions,
    #[serde(default)]
    pub service_provider_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiClientCredential {
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub actions: CredentialActions,
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
pub struct CreateApiClientCredential {
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub actions: CredentialActions,
    pub client_token: String,
    pub client_secret: String,
    pub created_on: DateTime<Utc>,
    pub credential_id: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub description: String,
    pub expires_on: DateTime<Utc>,
    pub status: CredentialStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAccountSwitchKeysRequest {
    pub client_id: ClientId,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSwitchKey {
    pub account_name: String,
    pub account_switch_key: String,
}

fn validate_client_type(value: &ClientType) -> Result<(), ValidationError> {
    one_of(value, &[ClientType::Client, ClientType::UserClient])
}

fn validate_access_level(value: &AccessLevel) -> Result<(), ValidationError> {
    one_of(value, &[AccessLevel::ReadOnly, AccessLevel::ReadWrite])
}

fn validate_api_access(access: &ApiAccess) -> Result<(), ValidationError> {
    if !access.all_accessible_apis && access.apis.is_empty() {
        return Err(violation(
            "apis",
            "apis: required unless all_accessible_apis is set",
        ));
    }
    Ok(())
}

fn validate_group_access(access: &GroupAccess) -> Result<(), ValidationError> {
    if !access.clone_authorized_user_groups && access.groups.is_empty() {
        return Err(violation(
            "groups",
            "groups: required unless clone_authorized_user_groups is set",
        ));
    }
    Ok(())
}

fn validate_cpcode_access(access: &CpCodeAccess) -> Result<(), ValidationError> {
    if !access.all_current_and_new_cpcodes && access.cpcodes.is_none() {
        return Err(violation(
            "cpcodes",
            "cpcodes: required unless all_current_and_new_cpcodes is set",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::render_errors;

    fn body() -> ApiClientBody {
        ApiClientBody {
            allow_account_switch: false,
            api_access: ApiAccess {
                all_accessible_apis: true,
                apis: Vec::new(),
            },
            authorized_users: vec!["mw+2".to_string()],
            can_auto_create_credential: false,
            client_description: "Test API Client".to_string(),
            client_name: "mw+2_1".to_string(),
            client_type: ClientType::Client,
            group_access: GroupAccess {
                clone_authorized_user_groups: true,
                groups: Vec::new(),
            },
            ip_acl: None,
            notification_emails: vec!["mw+2@example.com".to_string()],
            purge_options: None,
        }
    }

    #[test]
    fn test_minimal_body_is_valid() {
        assert!(body().validate().is_ok());
    }

    #[test]
    fn test_conditional_rules_all_reported() {
        let mut body = body();
        body.authorized_users.clear();
        body.client_type = ClientType::ServiceAccount;
        body.api_access.all_accessible_apis = false;
        body.group_access.clone_authorized_user_groups = false;
        body.purge_options = Some(PurgeOptions::default());
        body.ip_acl = Some(IpAcl {
            cidr: vec!["1.2.3.400/24".to_string()],
            enable: true,
        });

        let report = render_errors(&body.validate().unwrap_err());
        assert!(report.contains("authorized_users: cannot be blank"));
        assert!(report.contains("value 'SERVICE_ACCOUNT' is invalid"));
        assert!(report.contains("apis: required unless all_accessible_apis is set"));
        assert!(report.contains("groups: required unless clone_authorized_user_groups is set"));
        assert!(report.contains("cpcodes: required unless all_current_and_new_cpcodes is set"));
        assert!(report.contains("invalid CIDR address: 1.2.3.400/24"));
        assert_eq!(report.lines().count(), 6);
    }

    #[test]
    fn test_nested_api_and_group_rules() {
        let mut body = body();
        body.api_access = ApiAccess {
            all_accessible_apis: false,
            apis: vec![Api {
                access_level: AccessLevel::CredentialReadOnly,
                api_id: 0,
                api_name: String::new(),
                description: String::new(),
                documentation_url: String::new(),
                endpoint: String::new(),
            }],
        };
        body.group_access = GroupAccess {
            clone_authorized_user_groups: false,
            groups: vec![ClientGroup::default()],
        };

        let report = render_errors(&body.validate().unwrap_err());
        assert_eq!(report.lines().count(), 4, "{report}");
        assert!(report.contains("apis[0]"));
        assert!(report.contains("groups[0]"));
    }

    #[test]
    fn test_create_body_wire_format() {
        let request = CreateApiClientRequest {
            client: body(),
            create_credential: true,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["createCredential"], true);
        assert_eq!(value["clientType"], "CLIENT");
        assert_eq!(value["apiAccess"]["allAccessibleApis"], true);
        assert!(value.get("ipAcl").is_none());
        assert!(value.get("purgeOptions").is_none());
        assert!(value.get("client").is_none());
    }

    #[test]
    fn test_empty_access_lists_serialize_as_arrays() {
        let value = serde_json::to_value(body()).unwrap();

        assert_eq!(value["apiAccess"]["apis"], serde_json::json!([]));
        assert_eq!(value["groupAccess"]["groups"], serde_json::json!([]));
    }

    #[test]
    fn test_null_access_lists_decode_as_empty() {
        let api_access: ApiAccess =
            serde_json::from_str(r#"{"allAccessibleApis": true, "apis": null}"#).unwrap();
        assert!(api_access.all_accessible_apis);
        assert!(api_access.apis.is_empty());

        let group_access: GroupAccess = serde_json::from_str(
            r#"{
                "cloneAuthorizedUserGroups": false,
                "groups": [
                    {
                        "groupId": 123,
                        "groupName": "",
                        "isBlocked": false,
                        "parentGroupId": 0,
                        "roleDescription": "",
                        "roleId": 1,
                        "roleName": "",
                        "subgroups": null
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(group_access.groups.len(), 1);
        assert_eq!(group_access.groups[0].group_id, 123);
        assert!(group_access.groups[0].subgroups.is_empty());

        let cloned: GroupAccess =
            serde_json::from_str(r#"{"cloneAuthorizedUserGroups": true, "groups": null}"#).unwrap();
        assert!(cloned.groups.is_empty());
    }

    #[test]
    fn test_details_tolerate_null_fields() {
        let details: ApiClientDetails = serde_json::from_str(
            r#"{
                "accessToken": "akaa-1a2b3c4d1a2b3c4d-1a2b3c4d1a2b3c4d",
                "activeCredentialCount": 0,
                "allowAccountSwitch": false,
                "apiAccess": {"allAccessibleApis": true, "apis": null},
                "authorizedUsers": ["user1"],
                "canAutoCreateCredential": false,
                "clientDescription": null,
                "clientId": "abcdefgh12345678",
                "clientName": "test_user_1",
                "clientType": "CLIENT",
                "createdBy": "admin",
                "createdDate": "2024-07-16T23:01:50.000Z",
                "credentials": null,
                "groupAccess": {"cloneAuthorizedUserGroups": true, "groups": null},
                "ipAcl": {"cidr": null, "enable": false},
                "isLocked": false,
                "notificationEmails": null,
                "purgeOptions": {
                    "canPurgeByCacheTag": false,
                    "canPurgeByCpcode": false,
                    "cpcodeAccess": {"allCurrentAndNewCpcodes": true, "cpcodes": null}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(details.client_id, "abcdefgh12345678");
        assert!(details.client_description.is_empty());
        assert!(details.credentials.is_empty());
        assert!(details.notification_emails.is_empty());
        assert!(details.api_access.apis.is_empty());
        assert!(details.group_access.groups.is_empty());
        assert!(details.ip_acl.cidr.is_empty());
        assert_eq!(details.purge_options.cpcode_access.cpcodes, None);
    }
}
