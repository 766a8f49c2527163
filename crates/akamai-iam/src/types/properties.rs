/*
[INPUT]:  IAM property access schema definitions and serde requirements
[OUTPUT]: Property request/response structs with validation rules
[POS]:    Data layer - properties resource
[UPDATE]: When the properties schema changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::PropertyUserType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPropertiesRequest {
    pub group_id: Option<i64>,
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GetPropertyRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub property_id: i64,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ListUsersForPropertyRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub property_id: i64,
    pub user_type: Option<PropertyUserType>,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MovePropertyRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub property_id: i64,
    #[validate(nested)]
    pub body: MovePropertyRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovePropertyRequestBody {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub destination_group_id: i64,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub source_group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BlockUsersRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub property_id: i64,
    #[validate(length(min = 1, message = "cannot be blank"), nested)]
    pub users: Vec<BlockUserItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BlockUserItem {
    #[serde(rename = "uiIdentityId")]
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub identity_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MapPropertyIdToNameRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub property_id: i64,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MapPropertyNameToIdRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub property_name: String,
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub property_id: i64,
    pub property_name: String,
    pub property_type_description: String,
    pub group_id: i64,
    pub group_name: String,
    pub actions: Option<PropertyActions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyActions {
    #[serde(rename = "move")]
    pub move_property: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDetails {
    #[serde(rename = "arlConfigFile")]
    pub arl_config_file: String,
    pub created_by: String,
    pub created_date: Option<DateTime<Utc>>,
    pub group_id: i64,
    pub group_name: String,
    pub modified_by: String,
    pub modified_date: Option<DateTime<Utc>>,
    pub property_id: i64,
    pub property_name: String,
}

/// User with access (or blocked access) to a property
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyUser {
    pub first_name: String,
    pub is_blocked: bool,
    pub last_name: String,
    #[serde(rename = "uiIdentityId")]
    pub identity_id: String,
    #[serde(rename = "uiUserName")]
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_users_requires_items() {
        let request = BlockUsersRequest {
            property_id: 1,
            users: Vec::new(),
        };
        assert!(request.validate().is_err());

        let request = BlockUsersRequest {
            property_id: 1,
            users: vec![BlockUserItem::default()],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_id_rules_report_lower_bound() {
        let report = crate::validation::render_errors(&GetPropertyRequest::default().validate().unwrap_err());
        assert_eq!(
            report,
            "group_id: must be no less than 1\nproperty_id: must be no less than 1"
        );
    }

    #[test]
    fn test_property_actions_decode() {
        let property: Property = serde_json::from_str(
            r#"{"propertyId": 1, "propertyName": "p", "actions": {"move": true}}"#,
        )
        .unwrap();
        assert_eq!(property.actions, Some(PropertyActions { move_property: true }));
    }
}
