/*
[INPUT]:  IAM support catalog schema definitions and serde requirements
[OUTPUT]: Password policy, time zone, timeout policy and state lookup structs
[POS]:    Data layer - support resource
[UPDATE]: When the support schema changes
*/

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordPolicy {
    #[serde(rename = "caseDif")]
    pub case_diff: i64,
    pub max_repeating: i64,
    pub min_digits: i64,
    pub min_length: i64,
    pub min_letters: i64,
    pub min_non_alpha: i64,
    pub min_reuse: i64,
    #[serde(rename = "pwclass")]
    pub pw_class: String,
    pub rotate_frequency: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezone {
    pub timezone: String,
    pub description: String,
    pub offset: String,
    pub posix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeoutPolicy {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ListStatesRequest {
    #[validate(length(min = 1, message = "cannot be blank"))]
    pub country: String,
}
