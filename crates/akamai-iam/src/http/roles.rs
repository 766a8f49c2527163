/*
[INPUT]:  Role ids, names and granted role lists
[OUTPUT]: Role definitions with optional grants and users
[POS]:    HTTP layer - roles endpoints
[UPDATE]: When adding role endpoints or query flags
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{
    CreateRoleRequest, DeleteRoleRequest, GetRoleRequest, ListRolesRequest, Role, RoleGrantedRole,
    UpdateRoleRequest,
};

const ROLES: &str = "/identity-management/v2/user-admin/roles";

/// Custom and standard roles
#[async_trait]
pub trait Roles {
    /// POST /identity-management/v2/user-admin/roles
    async fn create_role(&self, params: CreateRoleRequest) -> Result<Role>;

    /// GET /identity-management/v2/user-admin/roles/{roleId}
    async fn get_role(&self, params: GetRoleRequest) -> Result<Role>;

    /// Update a role; empty fields are left unchanged
    ///
    /// PUT /identity-management/v2/user-admin/roles/{roleId}
    async fn update_role(&self, params: UpdateRoleRequest) -> Result<Role>;

    /// DELETE /identity-management/v2/user-admin/roles/{roleId}
    async fn delete_role(&self, params: DeleteRoleRequest) -> Result<()>;

    /// GET /identity-management/v2/user-admin/roles
    async fn list_roles(&self, params: ListRolesRequest) -> Result<Vec<Role>>;

    /// Roles the caller may grant when building a custom role
    ///
    /// GET /identity-management/v2/user-admin/roles/grantable-roles
    async fn list_grantable_roles(&self) -> Result<Vec<RoleGrantedRole>>;
}

#[async_trait]
impl Roles for IamClient {
    async fn create_role(&self, params: CreateRoleRequest) -> Result<Role> {
        self.validate(Operation::CreateRole, &params)?;

        let body = self.body(Operation::CreateRole, &params.body())?;
        self.send_json(Operation::CreateRole, ApiRequest::post(ROLES).json(body), &[201])
            .await
    }

    async fn get_role(&self, params: GetRoleRequest) -> Result<Role> {
        self.validate(Operation::GetRole, &params)?;

        let request = ApiRequest::get(format!("{ROLES}/{}", params.id))
            .query("actions", params.actions)
            .query("grantedRoles", params.granted_roles)
            .query("users", params.users);
        self.send_json(Operation::GetRole, request, &[200]).await
    }

    async fn update_role(&self, params: UpdateRoleRequest) -> Result<Role> {
        self.validate(Operation::UpdateRole, &params)?;

        let body = self.body(Operation::UpdateRole, &params.role)?;
        let request = ApiRequest::put(format!("{ROLES}/{}", params.id)).json(body);
        self.send_json(Operation::UpdateRole, request, &[200]).await
    }

    async fn delete_role(&self, params: DeleteRoleRequest) -> Result<()> {
        self.validate(Operation::DeleteRole, &params)?;

        let request = ApiRequest::delete(format!("{ROLES}/{}", params.id));
        self.send_empty(Operation::DeleteRole, request, &[204]).await
    }

    async fn list_roles(&self, params: ListRolesRequest) -> Result<Vec<Role>> {
        let request = ApiRequest::get(ROLES)
            .query("actions", params.actions)
            .query_opt("groupId", params.group_id)
            .query("ignoreContext", params.ignore_context)
            .query("users", params.users);
        self.send_json(Operation::ListRoles, request, &[200]).await
    }

    async fn list_grantable_roles(&self) -> Result<Vec<RoleGrantedRole>> {
        let request = ApiRequest::get(format!("{ROLES}/grantable-roles"));
        self.send_json(Operation::ListGrantableRoles, request, &[200]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::mock_client;
    use crate::types::{GrantedRoleId, RoleRequest, RoleType};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn role() -> serde_json::Value {
        json!({
            "roleId": 123456,
            "roleName": "Terraform admin",
            "roleDescription": "Admin granted role for tests",
            "type": "custom",
            "createdDate": "2022-04-11T10:52:03.811Z",
            "createdBy": "jBond",
            "modifiedDate": "2022-04-11T10:52:03.811Z",
            "modifiedBy": "jBond",
            "actions": {"edit": true, "delete": true},
            "grantedRoles": [
                {"grantedRoleId": 12345, "grantedRoleName": "Example Role", "grantedRoleDescription": "Example Role description"}
            ]
        })
    }

    #[tokio::test]
    async fn test_create_role() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ROLES))
            .and(body_json(json!({
                "roleName": "Terraform admin",
                "roleDescription": "Admin granted role for tests",
                "grantedRoles": [{"grantedRoleId": 12345}]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(role()))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let created = client
            .create_role(CreateRoleRequest {
                name: "Terraform admin".to_string(),
                description: "Admin granted role for tests".to_string(),
                granted_roles: vec![GrantedRoleId { id: 12345 }],
            })
            .await
            .expect("create_role failed");

        assert_eq!(created.role_type, RoleType::Custom);
        assert_eq!(created.granted_roles[0].role_id, 12345);
    }

    #[tokio::test]
    async fn test_create_role_reports_all_blank_fields() {
        let server = MockServer::start().await;
        let client = mock_client(&server);

        let err = client
            .create_role(CreateRoleRequest::default())
            .await
            .unwrap_err();

        assert!(err.is_validation());
        let report = err.to_string();
        assert_eq!(report.lines().count(), 4, "{report}");
    }

    #[tokio::test]
    async fn test_get_role_renders_every_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{ROLES}/123456")))
            .respond_with(ResponseTemplate::new(200).set_body_json(role()))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client
            .get_role(GetRoleRequest {
                id: 123456,
                actions: true,
                granted_roles: true,
                users: false,
            })
            .await
            .expect("get_role failed");

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(
            requests[0].url.query(),
            Some("actions=true&grantedRoles=true&users=false")
        );
    }

    #[tokio::test]
    async fn test_update_role_omits_empty_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{ROLES}/123456")))
            .and(body_json(json!({"roleName": "Terraform admin updated"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(role()))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client
            .update_role(UpdateRoleRequest {
                id: 123456,
                role: RoleRequest {
                    role_name: "Terraform admin updated".to_string(),
                    ..Default::default()
                },
            })
            .await
            .expect("update_role failed");
    }

    #[tokio::test]
    async fn test_delete_role() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{ROLES}/123456")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client
            .delete_role(DeleteRoleRequest { id: 123456 })
            .await
            .expect("delete_role failed");
    }

    #[tokio::test]
    async fn test_list_roles_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ROLES))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([role()])))
            .expect(2)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        client
            .list_roles(ListRolesRequest {
                actions: true,
                ..Default::default()
            })
            .await
            .expect("list_roles failed");
        client
            .list_roles(ListRolesRequest {
                group_id: Some(123),
                actions: true,
                ignore_context: true,
                users: true,
            })
            .await
            .expect("list_roles with group failed");

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(
            requests[0].url.query(),
            Some("actions=true&ignoreContext=false&users=false")
        );
        assert_eq!(
            requests[1].url.query(),
            Some("actions=true&groupId=123&ignoreContext=true&users=true")
        );
    }

    #[tokio::test]
    async fn test_list_grantable_roles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{ROLES}/grantable-roles")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"grantedRoleId": 1, "grantedRoleName": "Admin"},
                {"grantedRoleId": 2, "grantedRoleName": "Viewer", "grantedRoleDescription": "Read only"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let roles = client
            .list_grantable_roles()
            .await
            .expect("list_grantable_roles failed");

        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].description, "Read only");
    }
}
