//! Enumeration metadata as returned by `/v2/metadata/enums`.

use serde::{Deserialize, Deserializer, Serialize};

/// One value of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Symbolic name (e.g. `SENT`).
    pub name: String,

    /// Value identifier. The wire sends either a JSON string or a number;
    /// both decode to a string here.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display caption. Empty when the platform has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

/// One enumeration: dotted FQN plus its ordered value list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    /// Fully qualified dotted name
    /// (e.g. `com.haulmont.cuba.core.global.SendingStatus`).
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
