/*
[INPUT]:  User identity id and group id
[OUTPUT]: Property ids the user is blocked from
[POS]:    HTTP layer - blocked properties endpoints
[UPDATE]: When the blocked properties API changes
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{ListBlockedPropertiesRequest, UpdateBlockedPropertiesRequest};

fn blocked_properties_path(identity_id: &str, group_id: i64) -> String {
    format!("/identity-management/v2/user-admin/ui-identities/{identity_id}/groups/{group_id}/blocked-properties")
}

/// Per-group property blocks for a user
#[async_trait]
pub trait BlockedProperties {
    /// GET /identity-management/v2/user-admin/ui-identities/{uiIdentityId}/groups/{groupId}/blocked-properties
    async fn list_blocked_properties(&self, params: ListBlockedPropertiesRequest) -> Result<Vec<i64>>;

    /// Replace the blocked property list
    ///
    /// PUT /identity-management/v2/user-admin/ui-identities/{uiIdentityId}/groups/{groupId}/blocked-properties
    async fn update_blocked_properties(&self, params: UpdateBlockedPropertiesRequest) -> Result<Vec<i64>>;
}

#[async_trait]
impl BlockedProperties for IamClient {
    async fn list_blocked_properties(&self, params: ListBlockedPropertiesRequest) -> Result<Vec<i64>> {
        self.validate(Operation::ListBlockedProperties, &params)?;

        let request = ApiRequest::get(blocked_properties_path(&params.identity_id, params.group_id));
        self.send_json(Operation::ListBlockedProperties, request, &[200]).await
    }

    async fn update_blocked_properties(&self, params: UpdateBlockedPropertiesRequest) -> Result<Vec<i64>> {
        self.validate(Operation::UpdateBlockedProperties, &params)?;

        let body = self.body(Operation::UpdateBlockedProperties, &params.properties)?;
        let request = ApiRequest::put(blocked_properties_path(&params.identity_id, params.group_id)).json(body);
        self.send_json(Operation::UpdateBlockedProperties, request, &[200]).await
    }
}
