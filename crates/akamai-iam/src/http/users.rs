/*
[INPUT]:  User profiles, auth grants, notification settings
[OUTPUT]: User records and listings
[POS]:    HTTP layer - users endpoints
[UPDATE]: When adding user endpoints or query flags
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{
    AuthGrant, CreateUserRequest, GetUserRequest, ListUsersRequest, RemoveUserRequest, UpdateTfaRequest,
    UpdateUserAuthGrantsRequest, UpdateUserInfoRequest, UpdateUserNotificationsRequest, User, UserBasicInfo,
    UserListItem, UserNotifications,
};

const UI_IDENTITIES: &str = "/identity-management/v2/user-admin/ui-identities";

/// User administration
#[async_trait]
pub trait Users {
    /// POST /identity-management/v2/user-admin/ui-identities?sendEmail={sendEmail}
    async fn create_user(&self, params: CreateUserRequest) -> Result<User>;

    /// GET /identity-management/v2/user-admin/ui-identities/{uiIdentityId}
    async fn get_user(&self, params: GetUserRequest) -> Result<User>;

    /// GET /identity-management/v2/user-admin/ui-identities
    async fn list_users(&self, params: ListUsersRequest) -> Result<Vec<UserListItem>>;

    /// DELETE /identity-management/v2/user-admin/ui-identities/{uiIdentityId}
    async fn remove_user(&self, params: RemoveUserRequest) -> Result<()>;

    /// PUT /identity-management/v2/user-admin/ui-identities/{uiIdentityId}/auth-grants
    async fn update_user_auth_grants(&self, params: UpdateUserAuthGrantsRequest) -> Result<Vec<AuthGrant>>;

    /// PUT /identity-management/v2/user-admin/ui-identities/{uiIdentityId}/basic-info
    async fn update_user_info(&self, params: UpdateUserInfoRequest) -> Result<UserBasicInfo>;

    /// PUT /identity-management/v2/user-admin/ui-identities/{uiIdentityId}/notifications
    async fn update_user_notifications(
        &self,
        params: UpdateUserNotificationsRequest,
    ) -> Result<UserNotifications>;

    /// Enable, disable or reset two-factor authentication
    ///
    /// PUT /identity-management/v2/user-admin/ui-identities/{uiIdentityId}/tfa?action={action}
    async fn update_tfa(&self, params: UpdateTfaRequest) -> Result<()>;
}

#[async_trait]
impl Users for IamClient {
    async fn create_user(&self, params: CreateUserRequest) -> Result<User> {
        self.validate(Operation::CreateUser, &params)?;

        let body = self.body(Operation::CreateUser, &params)?;
        let request = ApiRequest::post(UI_IDENTITIES)
            .query("sendEmail", params.send_email)
            .json(body);
        self.send_json(Operation::CreateUser, request, &[201]).await
    }

    async fn get_user(&self, params: GetUserRequest) -> Result<User> {
        self.validate(Operation::GetUser, &params)?;

        let request = ApiRequest::get(format!("{UI_IDENTITIES}/{}", params.identity_id))
            .query("actions", params.actions)
            .query("authGrants", params.auth_grants)
            .query("notifications", params.notifications);
        self.send_json(Operation::GetUser, request, &[200]).await
    }

    async fn list_users(&self, params: ListUsersRequest) -> Result<Vec<UserListItem>> {
        let request = ApiRequest::get(UI_IDENTITIES)
            .query("actions", params.actions)
            .query("authGrants", params.auth_grants)
            .query_opt("groupId", params.group_id);
        self.send_json(Operation::ListUsers, request, &[200]).await
    }

    async fn remove_user(&self, params: RemoveUserRequest) -> Result<()> {
        self.validate(Operation::RemoveUser, &params)?;

        let request = ApiRequest::delete(format!("{UI_IDENTITIES}/{}", params.identity_id));
        self.send_empty(Operation::RemoveUser, request, &[200, 204]).await
    }

    async fn update_user_auth_grants(&self, params: UpdateUserAuthGrantsRequest) -> Result<Vec<AuthGrant>> {
        self.validate(Operation::UpdateUserAuthGrants, &params)?;

        let body = self.body(Operation::UpdateUserAuthGrants, &params.auth_grants)?;
        let request = ApiRequest::put(format!("{UI_IDENTITIES}/{}/auth-grants", params.identity_id)).json(body);
        self.send_json(Operation::UpdateUserAuthGrants, request, &[200]).await
    }

    async fn update_user_info(&self, params: UpdateUserInfoRequest) -> Result<UserBasicInfo> {
        self.validate(Operation::UpdateUserInfo, &params)?;

        let body = self.body(Operation::UpdateUserInfo, &params.user)?;
        let request = ApiRequest::put(format!("{UI_IDENTITIES}/{}/basic-info", params.identity_id)).json(body);
        self.send_json(Operation::UpdateUserInfo, request, &[200]).await
    }

    async fn update_user_notifications(
        &self,
        params: UpdateUserNotificationsRequest,
    ) -> Result<UserNotifications> {
        self.validate(Operation::UpdateUserNotifications, &params)?;

        let body = self.body(Operation::UpdateUserNotifications, &params.notifications)?;
        let request =
            ApiRequest::put(format!("{UI_IDENTITIES}/{}/notifications", params.identity_id)).json(body);
        self.send_json(Operation::UpdateUserNotifications, request, &[200]).await
    }

    async fn update_tfa(&self, params: UpdateTfaRequest) -> Result<()> {
        self.validate(Operation::UpdateTfa, &params)?;

        let request = ApiRequest::put(format!("{UI_IDENTITIES}/{}/tfa", params.identity_id))
            .query("action", params.action);
        self.send_empty(Operation::UpdateTfa, request, &[204]).await
    }
}
