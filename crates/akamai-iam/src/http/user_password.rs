/*
[INPUT]:  User identity id plus email flag or new password
[OUTPUT]: Generated password when the reset is not emailed
[POS]:    HTTP layer - user password endpoints
[UPDATE]: When the user password API changes
*/

use async_trait::async_trait;

use crate::http::user_lock::user_admin_path;
use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::users::NewPasswordBody;
use crate::types::{ResetUserPasswordRequest, ResetUserPasswordResponse, SetUserPasswordRequest};

/// Password management for users
#[async_trait]
pub trait UserPassword {
    /// Reset a password, optionally emailing the user a link instead of
    /// returning the new password
    ///
    /// POST /identity-management/v3/user-admin/ui-identities/{uiIdentityId}/reset-password?sendEmail={sendEmail}
    async fn reset_user_password(&self, params: ResetUserPasswordRequest) -> Result<ResetUserPasswordResponse>;

    /// POST /identity-management/v3/user-admin/ui-identities/{uiIdentityId}/set-password
    async fn set_user_password(&self, params: SetUserPasswordRequest) -> Result<()>;
}

#[async_trait]
impl UserPassword for IamClient {
    async fn reset_user_password(&self, params: ResetUserPasswordRequest) -> Result<ResetUserPasswordResponse> {
        self.validate(Operation::ResetUserPassword, &params)?;

        let request = ApiRequest::post(format!("{}/reset-password", user_admin_path(&params.identity_id)))
            .query("sendEmail", params.send_email);
        self.send_json_or_default(Operation::ResetUserPassword, request, &[200, 204])
            .await
    }

    async fn set_user_password(&self, params: SetUserPasswordRequest) -> Result<()> {
        self.validate(Operation::SetUserPassword, &params)?;

        let body = self.body(
            Operation::SetUserPassword,
            &NewPasswordBody {
                new_password: &params.new_password,
            },
        )?;
        let request =
            ApiRequest::post(format!("{}/set-password", user_admin_path(&params.identity_id))).json(body);
        self.send_empty(Operation::SetUserPassword, request, &[204]).await
    }
}
