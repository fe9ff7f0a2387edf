// ── Identifier types ──
//
// The CDI server and hand-written config files disagree on whether ids are
// strings or numbers. Both are accepted and normalised to strings so that
// `101` from JSON and `"101"` from a TOML table key compare equal.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Unsigned(n) => n.to_string(),
            StringOrNumber::Float(f) => f.to_string(),
        }
    }
}

/// Deserialize a string or bare number into a `String`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

/// Like [`string_or_number`], for optional fields.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                string_or_number(deserializer).map(Self)
            }
        }
    };
}

string_id! {
    /// Server-assigned room identifier (`roomId`).
    RoomId
}

string_id! {
    /// A single light fixture identifier as the area-control API knows it.
    LightId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_id_accepts_number_and_string() {
        let a: RoomId = serde_json::from_str("101").unwrap();
        let b: RoomId = serde_json::from_str("\"101\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "101");
    }

    #[test]
    fn room_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoomId::new("7F-02")).unwrap();
        assert_eq!(json, "\"7F-02\"");
    }
}
