/*
[INPUT]:  IAM API schema definitions and serde requirements
[OUTPUT]: Closed string enumerations shared across resources
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new enumerations added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Client,
    UserClient,
    ServiceAccount,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Client => "CLIENT",
            ClientType::UserClient => "USER_CLIENT",
            ClientType::ServiceAccount => "SERVICE_ACCOUNT",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessLevel {
    #[serde(rename = "READ-ONLY")]
    ReadOnly,
    #[serde(rename = "READ-WRITE")]
    ReadWrite,
    #[serde(rename = "CREDENTIAL-READ-ONLY")]
    CredentialReadOnly,
    #[serde(rename = "CREDENTIAL-READ-WRITE")]
    CredentialReadWrite,
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessLevel::ReadOnly => "READ-ONLY",
            AccessLevel::ReadWrite => "READ-WRITE",
            AccessLevel::CredentialReadOnly => "CREDENTIAL-READ-ONLY",
            AccessLevel::CredentialReadWrite => "CREDENTIAL-READ-WRITE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CredentialStatus {
    Active,
    Inactive,
    Deleted,
}

/// Two-factor authentication action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TfaAction {
    Enable,
    Disable,
    Reset,
}

impl fmt::Display for TfaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TfaAction::Enable => "enable",
            TfaAction::Disable => "disable",
            TfaAction::Reset => "reset",
        })
    }
}

/// Which users a group move affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AffectedUserType {
    LostAccess,
    GainAccess,
}

impl fmt::Display for AffectedUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AffectedUserType::LostAccess => "lostAccess",
            AffectedUserType::GainAccess => "gainAccess",
        })
    }
}

/// Filter for users of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyUserType {
    All,
    Assigned,
    Blocked,
}

impl fmt::Display for PropertyUserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyUserType::All => "all",
            PropertyUserType::Assigned => "assigned",
            PropertyUserType::Blocked => "blocked",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Custom,
    Standard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_display() {
        for client_type in [ClientType::Client, ClientType::UserClient, ClientType::ServiceAccount] {
            let wire = serde_json::to_string(&client_type).unwrap();
            assert_eq!(wire, format!("\"{client_type}\""));
        }
        for level in [AccessLevel::ReadOnly, AccessLevel::ReadWrite] {
            let wire = serde_json::to_string(&level).unwrap();
            assert_eq!(wire, format!("\"{level}\""));
        }
        for kind in [AffectedUserType::LostAccess, AffectedUserType::GainAccess] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_credential_status_roundtrip() {
        let status: CredentialStatus = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(status, CredentialStatus::Inactive);
    }
}
