/*
[INPUT]:  IAM group schema definitions and serde requirements
[OUTPUT]: Group request/response structs with validation rules
[POS]:    Data layer - groups resource
[UPDATE]: When the groups schema changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::AffectedUserType;
use super::models::serde_helpers;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CreateGroupRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub parent_group_id: i64,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub group_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GetGroupRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListGroupsRequest {
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RemoveGroupRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateGroupNameRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub group_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupNameBody<'a> {
    pub group_name: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoveGroupRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub source_group_id: i64,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub destination_group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ListAffectedUsersRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub source_group_id: i64,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub destination_group_id: i64,
    pub user_type: Option<AffectedUserType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub actions: Option<GroupActions>,
    pub created_by: String,
    pub created_date: Option<DateTime<Utc>>,
    pub group_id: i64,
    pub group_name: String,
    pub modified_by: String,
    pub modified_date: Option<DateTime<Utc>>,
    pub parent_group_id: i64,
    #[serde(deserialize_with = "serde_helpers::null_default")]
    pub sub_groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupActions {
    pub delete: bool,
    pub edit: bool,
}

/// User whose access changes when a group moves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupUser {
    pub account_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub last_login_date: Option<DateTime<Utc>>,
    #[serde(rename = "uiIdentityId")]
    pub identity_id: String,
    #[serde(rename = "uiUserName")]
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::render_errors;

    #[test]
    fn test_move_group_reports_both_ids() {
        let report = render_errors(&MoveGroupRequest::default().validate().unwrap_err());
        assert_eq!(report.lines().count(), 2);
        assert!(report.lines().all(|line| line.ends_with(": must be no less than 1")));
    }

    #[test]
    fn test_null_sub_groups_decode_as_empty() {
        let group: Group = serde_json::from_str(
            r#"{"groupId": 12345, "groupName": "Top", "parentGroupId": 0, "subGroups": null}"#,
        )
        .unwrap();
        assert_eq!(group.group_id, 12345);
        assert!(group.sub_groups.is_empty());
    }

    #[test]
    fn test_group_tree_decodes() {
        let group: Group = serde_json::from_str(
            r#"{
                "groupId": 12345,
                "groupName": "Top Level group",
                "createdDate": "2012-04-28T00:00:00.000Z",
                "createdBy": "johndoe",
                "modifiedDate": "2012-04-28T00:00:00.000Z",
                "modifiedBy": "johndoe",
                "subGroups": [{"groupId": 12346, "groupName": "child", "parentGroupId": 12345}]
            }"#,
        )
        .unwrap();

        assert_eq!(group.sub_groups.len(), 1);
        assert_eq!(group.sub_groups[0].parent_group_id, 12345);
        assert_eq!(group.actions, None);
    }
}
