/*
[INPUT]:  User identity id
[OUTPUT]: None (state change only)
[POS]:    HTTP layer - user lock endpoints
[UPDATE]: When the user lock API changes
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{LockUserRequest, UnlockUserRequest};

pub(crate) fn user_admin_path(identity_id: &str) -> String {
    format!("/identity-management/v3/user-admin/ui-identities/{identity_id}")
}

/// Locking users out of Control Center
#[async_trait]
pub trait UserLock {
    /// POST /identity-management/v3/user-admin/ui-identities/{uiIdentityId}/lock
    async fn lock_user(&self, params: LockUserRequest) -> Result<()>;

    /// POST /identity-management/v3/user-admin/ui-identities/{uiIdentityId}/unlock
    async fn unlock_user(&self, params: UnlockUserRequest) -> Result<()>;
}

#[async_trait]
impl UserLock for IamClient {
    async fn lock_user(&self, params: LockUserRequest) -> Result<()> {
        self.validate(Operation::LockUser, &params)?;

        let request = ApiRequest::post(format!("{}/lock", user_admin_path(&params.identity_id)));
        self.send_empty(Operation::LockUser, request, &[200, 204]).await
    }

    async fn unlock_user(&self, params: UnlockUserRequest) -> Result<()> {
        self.validate(Operation::UnlockUser, &params)?;

        let request = ApiRequest::post(format!("{}/unlock", user_admin_path(&params.identity_id)));
        self.send_empty(Operation::UnlockUser, request, &[200, 204]).await
    }
}
