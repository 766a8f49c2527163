/*
[INPUT]:  Username plus client type / group filters
[OUTPUT]: CP codes, APIs and groups a user may grant to an API client
[POS]:    HTTP layer - API client authoring helper endpoints
[UPDATE]: When adding helper lookups
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{
    AccessibleGroup, AllowedApi, AllowedCpCode, AuthorizedUser, ListAccessibleGroupsRequest,
    ListAllowedApisRequest, ListAllowedCpCodesRequest,
};

const USERS: &str = "/identity-management/v3/users";

/// Lookups used while authoring API clients
#[async_trait]
pub trait Helper {
    /// POST /identity-management/v3/users/{userName}/allowed-cpcodes
    async fn list_allowed_cp_codes(&self, params: ListAllowedCpCodesRequest) -> Result<Vec<AllowedCpCode>>;

    /// Users who may be named as authorized users of an API client
    ///
    /// GET /identity-management/v3/users
    async fn list_authorized_users(&self) -> Result<Vec<AuthorizedUser>>;

    /// GET /identity-management/v3/users/{userName}/allowed-apis
    async fn list_allowed_apis(&self, params: ListAllowedApisRequest) -> Result<Vec<AllowedApi>>;

    /// GET /identity-management/v3/users/{userName}/group-access
    async fn list_accessible_groups(&self, params: ListAccessibleGroupsRequest) -> Result<Vec<AccessibleGroup>>;
}

#[async_trait]
impl Helper for IamClient {
    async fn list_allowed_cp_codes(&self, params: ListAllowedCpCodesRequest) -> Result<Vec<AllowedCpCode>> {
        self.validate(Operation::ListAllowedCpCodes, &params)?;

        let body = self.body(Operation::ListAllowedCpCodes, &params.body)?;
        let request = ApiRequest::post(format!("{USERS}/{}/allowed-cpcodes", params.user_name)).json(body);
        self.send_json(Operation::ListAllowedCpCodes, request, &[200]).await
    }

    async fn list_authorized_users(&self) -> Result<Vec<AuthorizedUser>> {
        self.send_json(Operation::ListAuthorizedUsers, ApiRequest::get(USERS), &[200])
            .await
    }

    async fn list_allowed_apis(&self, params: ListAllowedApisRequest) -> Result<Vec<AllowedApi>> {
        self.validate(Operation::ListAllowedApis, &params)?;

        let request = ApiRequest::get(format!("{USERS}/{}/allowed-apis", params.user_name))
            .query("allowAccountSwitch", params.allow_account_switch)
            .query_opt("clientType", params.client_type);
        self.send_json(Operation::ListAllowedApis, request, &[200]).await
    }

    async fn list_accessible_groups(&self, params: ListAccessibleGroupsRequest) -> Result<Vec<AccessibleGroup>> {
        self.validate(Operation::ListAccessibleGroups, &params)?;

        let request = ApiRequest::get(format!("{USERS}/{}/group-access", params.user_name));
        self.send_json(Operation::ListAccessibleGroups, request, &[200]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::mock_client;
    use crate::types::{AccessLevel, AllowedCpCodesGroup, ClientType, ListAllowedCpCodesRequestBody};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_allowed_cp_codes_for_service_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("{USERS}/jsmith/allowed-cpcodes")))
            .and(body_json(json!({
                "clientType": "SERVICE_ACCOUNT",
                "groups": [{"groupId": 123, "roleId": 1}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Stream Analyzer (36915)", "value": 36915},
                {"name": "plopessa-uvod-ns (373118)", "value": 373118}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let codes = client
            .list_allowed_cp_codes(ListAllowedCpCodesRequest {
                user_name: "jsmith".to_string(),
                body: ListAllowedCpCodesRequestBody {
                    client_type: ClientType::ServiceAccount,
                    groups: vec![AllowedCpCodesGroup {
                        group_id: 123,
                        role_id: 1,
                        ..Default::default()
                    }],
                },
            })
            .await
            .expect("list_allowed_cp_codes failed");

        assert_eq!(codes[1].value, 373118);
    }

    #[tokio::test]
    async fn test_list_allowed_cp_codes_service_account_needs_groups() {
        let server = MockServer::start().await;
        let client = mock_client(&server);

        let err = client
            .list_allowed_cp_codes(ListAllowedCpCodesRequest {
                user_name: "jsmith".to_string(),
                body: ListAllowedCpCodesRequestBody {
                    client_type: ClientType::ServiceAccount,
                    groups: Vec::new(),
                },
            })
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert!(
            err.to_string()
                .contains("groups: required when client_type is SERVICE_ACCOUNT")
        );
    }

    #[tokio::test]
    async fn test_list_authorized_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USERS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "username": "jdoe",
                "firstName": "John",
                "lastName": "Doe",
                "email": "jdoe@example.com",
                "uiIdentityId": "A-BC-1234567"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let users = client
            .list_authorized_users()
            .await
            .expect("list_authorized_users failed");

        assert_eq!(users[0].identity_id, "A-BC-1234567");
    }

    #[tokio::test]
    async fn test_list_allowed_apis() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{USERS}/jsmith/allowed-apis")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "accessLevels": ["READ-ONLY", "READ-WRITE"],
                "apiId": 1,
                "apiName": "Test API",
                "description": "Test API description",
                "documentationUrl": "https://example.com",
                "endpoint": "/test-api/",
                "hasAccess": true,
                "serviceProviderId": 1
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let apis = client
            .list_allowed_apis(ListAllowedApisRequest {
                user_name: "jsmith".to_string(),
                client_type: Some(ClientType::UserClient),
                allow_account_switch: true,
            })
            .await
            .expect("list_allowed_apis failed");

        assert_eq!(apis[0].access_levels, vec![AccessLevel::ReadOnly, AccessLevel::ReadWrite]);
        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(
            requests[0].url.query(),
            Some("allowAccountSwitch=true&clientType=USER_CLIENT")
        );
    }

    #[tokio::test]
    async fn test_list_accessible_groups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{USERS}/jsmith/group-access")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "groupId": 1,
                "groupName": "Top",
                "isBlocked": false,
                "roleDescription": "Admin role",
                "roleId": 2,
                "roleName": "Admin",
                "subGroups": [{"groupId": 3, "groupName": "Child", "parentGroupId": 1, "subGroups": []}]
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let groups = client
            .list_accessible_groups(ListAccessibleGroupsRequest {
                user_name: "jsmith".to_string(),
            })
            .await
            .expect("list_accessible_groups failed");

        assert_eq!(groups[0].sub_groups[0].parent_group_id, 1);
    }

    #[tokio::test]
    async fn test_helper_lookups_require_user_name() {
        let server = MockServer::start().await;
        let client = mock_client(&server);

        let err = client
            .list_accessible_groups(ListAccessibleGroupsRequest::default())
            .await
            .unwrap_err();

        assert!(err.is_operation(Operation::ListAccessibleGroups));
        assert!(err.is_validation());
    }
}
