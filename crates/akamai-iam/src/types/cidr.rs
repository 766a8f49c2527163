/*
[INPUT]:  IAM CIDR allowlist schema definitions and serde requirements
[OUTPUT]: CIDR block and IP allowlist request/response structs
[POS]:    Data layer - CIDR allowlist resource
[UPDATE]: When the allowlist schema changes
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::serde_helpers;
use crate::validation::validate_cidr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCidrBlocksRequest {
    pub actions: bool,
}

/// Body of the create and update calls.
///
/// `comments` is tri-state: `None` omits the field, `Some(None)` sends an
/// explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CidrBlockRequestBody {
    #[validate(custom(function = "validate_cidr"))]
    pub cidr_block: String,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<Option<String>>,
    pub enabled: bool,
}

pub type CreateCidrBlockRequest = CidrBlockRequestBody;

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GetCidrBlockRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub cidr_block_id: i64,
    pub actions: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateCidrBlockRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub cidr_block_id: i64,
    #[validate(nested)]
    pub body: CidrBlockRequestBody,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct DeleteCidrBlockRequest {
    #[validate(range(min = 1, message = "must be no less than 1"))]
    pub cidr_block_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ValidateCidrBlockRequest {
    #[validate(custom(function = "validate_cidr"))]
    pub cidr_block: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CidrBlock {
    #[serde(default)]
    pub actions: Option<CidrActions>,
    pub cidr_block: String,
    pub cidr_block_id: i64,
    #[serde(
        default,
        deserialize_with = "serde_helpers::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<Option<String>>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub enabled: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub modified_by: String,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CidrActions {
    pub delete: bool,
    pub edit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpAllowlistStatus {
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_rejects_invalid_cidr() {
        let body = CidrBlockRequestBody {
            cidr_block: "1.2.3.4/33".to_string(),
            comments: None,
            enabled: true,
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_body_comments_wire_states() {
        let mut body = CidrBlockRequestBody {
            cidr_block: "1.2.3.4/32".to_string(),
            comments: None,
            enabled: true,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"cidrBlock":"1.2.3.4/32","enabled":true}"#
        );

        body.comments = Some(None);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"cidrBlock":"1.2.3.4/32","comments":null,"enabled":true}"#
        );

        body.comments = Some(Some("abc".to_string()));
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"cidrBlock":"1.2.3.4/32","comments":"abc","enabled":true}"#
        );
    }
}
