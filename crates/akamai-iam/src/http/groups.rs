/*
[INPUT]:  Group ids, names and move directions
[OUTPUT]: Group trees and users affected by a move
[POS]:    HTTP layer - groups endpoints
[UPDATE]: When adding group endpoints
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::groups::GroupNameBody;
use crate::types::{
    CreateGroupRequest, GetGroupRequest, Group, GroupUser, ListAffectedUsersRequest, ListGroupsRequest,
    MoveGroupRequest, RemoveGroupRequest, UpdateGroupNameRequest,
};

const GROUPS: &str = "/identity-management/v3/user-admin/groups";

/// Account group hierarchy
#[async_trait]
pub trait Groups {
    /// Create a subgroup under `parent_group_id`
    ///
    /// POST /identity-management/v3/user-admin/groups/{parentGroupId}
    async fn create_group(&self, params: CreateGroupRequest) -> Result<Group>;

    /// GET /identity-management/v3/user-admin/groups/{groupId}?actions={actions}
    async fn get_group(&self, params: GetGroupRequest) -> Result<Group>;

    /// GET /identity-management/v3/user-admin/groups?actions={actions}
    async fn list_groups(&self, params: ListGroupsRequest) -> Result<Vec<Group>>;

    /// DELETE /identity-management/v3/user-admin/groups/{groupId}
    async fn remove_group(&self, params: RemoveGroupRequest) -> Result<()>;

    /// PUT /identity-management/v3/user-admin/groups/{groupId}
    async fn update_group_name(&self, params: UpdateGroupNameRequest) -> Result<Group>;

    /// POST /identity-management/v3/user-admin/groups/move
    async fn move_group(&self, params: MoveGroupRequest) -> Result<()>;

    /// Users who lose or gain access when a group moves
    ///
    /// GET /identity-management/v3/user-admin/groups/move/{sourceGroupId}/{destinationGroupId}/affected-users
    async fn list_affected_users(&self, params: ListAffectedUsersRequest) -> Result<Vec<GroupUser>>;
}

#[async_trait]
impl Groups for IamClient {
    async fn create_group(&self, params: CreateGroupRequest) -> Result<Group> {
        self.validate(Operation::CreateGroup, &params)?;

        let body = self.body(
            Operation::CreateGroup,
            &GroupNameBody {
                group_name: &params.group_name,
            },
        )?;
        let request = ApiRequest::post(format!("{GROUPS}/{}", params.parent_group_id)).json(body);
        self.send_json(Operation::CreateGroup, request, &[201]).await
    }

    async fn get_group(&self, params: GetGroupRequest) -> Result<Group> {
        self.validate(Operation::GetGroup, &params)?;

        let request = ApiRequest::get(format!("{GROUPS}/{}", params.group_id)).query("actions", params.actions);
        self.send_json(Operation::GetGroup, request, &[200]).await
    }

    async fn list_groups(&self, params: ListGroupsRequest) -> Result<Vec<Group>> {
        let request = ApiRequest::get(GROUPS).query("actions", params.actions);
        self.send_json(Operation::ListGroups, request, &[200]).await
    }

    async fn remove_group(&self, params: RemoveGroupRequest) -> Result<()> {
        self.validate(Operation::RemoveGroup, &params)?;

        let request = ApiRequest::delete(format!("{GROUPS}/{}", params.group_id));
        self.send_empty(Operation::RemoveGroup, request, &[204]).await
    }

    async fn update_group_name(&self, params: UpdateGroupNameRequest) -> Result<Group> {
        self.validate(Operation::UpdateGroupName, &params)?;

        let body = self.body(
            Operation::UpdateGroupName,
            &GroupNameBody {
                group_name: &params.group_name,
            },
        )?;
        let request = ApiRequest::put(format!("{GROUPS}/{}", params.group_id)).json(body);
        self.send_json(Operation::UpdateGroupName, request, &[200]).await
    }

    async fn move_group(&self, params: MoveGroupRequest) -> Result<()> {
        self.validate(Operation::MoveGroup, &params)?;

        let body = self.body(Operation::MoveGroup, &params)?;
        let request = ApiRequest::post(format!("{GROUPS}/move")).json(body);
        self.send_empty(Operation::MoveGroup, request, &[204]).await
    }

    async fn list_affected_users(&self, params: ListAffectedUsersRequest) -> Result<Vec<GroupUser>> {
        self.validate(Operation::ListAffectedUsers, &params)?;

        let request = ApiRequest::get(format!(
            "{GROUPS}/move/{}/{}/affected-users",
            params.source_group_id, params.destination_group_id
        ))
        .query_opt("userType", params.user_type);
        self.send_json(Operation::ListAffectedUsers, request, &[200]).await
    }
}
