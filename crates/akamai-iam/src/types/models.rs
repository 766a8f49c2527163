/*
[INPUT]:  Caller-supplied identifiers and nullable payload fields
[OUTPUT]: Shared identifier types and serde helpers
[POS]:    Data layer - cross-resource building blocks
[UPDATE]: When adding shared identifiers or serde helpers
*/

use std::fmt;

/// API client identifier.
///
/// `Current` addresses the API client the request is authenticated as and
/// becomes the literal `self` path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClientId {
    #[default]
    Current,
    Id(String),
}

impl ClientId {
    pub fn id(id: impl Into<String>) -> Self {
        ClientId::Id(id.into())
    }

    /// Path segment for URL construction; an empty id also means `self`
    pub fn path_segment(&self) -> &str {
        match self {
            ClientId::Id(id) if !id.is_empty() => id,
            _ => "self",
        }
    }

    /// Whether an explicit, non-empty id was given
    pub fn is_explicit(&self) -> bool {
        matches!(self, ClientId::Id(id) if !id.is_empty())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl From<&str> for ClientId {
    fn from(id: &str) -> Self {
        ClientId::Id(id.to_string())
    }
}

impl From<String> for ClientId {
    fn from(id: String) -> Self {
        ClientId::Id(id)
    }
}

pub(crate) mod serde_helpers {
    use serde::{Deserialize, Deserializer};

    /// Distinguish an absent field (`None`) from an explicit `null`
    /// (`Some(None)`). Pair with `#[serde(default)]`.
    pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }

    /// Read an explicit `null` as the type's default. Pair with
    /// `#[serde(default)]` so an absent field behaves the same.
    pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(
            default,
            deserialize_with = "serde_helpers::deserialize_nullable",
            skip_serializing_if = "Option::is_none"
        )]
        comments: Option<Option<String>>,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "serde_helpers::null_default")]
        items: Vec<i64>,
        #[serde(default, deserialize_with = "serde_helpers::null_default")]
        label: String,
    }

    #[test]
    fn test_null_reads_as_default() {
        let null: Listing = serde_json::from_str(r#"{"items": null, "label": null}"#).unwrap();
        let absent: Listing = serde_json::from_str("{}").unwrap();
        let value: Listing = serde_json::from_str(r#"{"items": [1, 2], "label": "x"}"#).unwrap();

        assert_eq!(null, Listing::default());
        assert_eq!(absent, Listing::default());
        assert_eq!(value.items, vec![1, 2]);
        assert_eq!(value.label, "x");
    }

    #[test]
    fn test_client_id_path_segment() {
        assert_eq!(ClientId::Current.path_segment(), "self");
        assert_eq!(ClientId::default().path_segment(), "self");
        assert_eq!(ClientId::id("").path_segment(), "self");
        assert_eq!(ClientId::from("1234").path_segment(), "1234");
        assert!(!ClientId::id("").is_explicit());
        assert!(ClientId::id("abc").is_explicit());
    }

    #[test]
    fn test_nullable_three_states() {
        let absent: Note = serde_json::from_str("{}").unwrap();
        let null: Note = serde_json::from_str(r#"{"comments": null}"#).unwrap();
        let value: Note = serde_json::from_str(r#"{"comments": "office"}"#).unwrap();

        assert_eq!(absent.comments, None);
        assert_eq!(null.comments, Some(None));
        assert_eq!(value.comments, Some(Some("office".to_string())));

        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"comments":null}"#);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"comments":"office"}"#);
    }
}
