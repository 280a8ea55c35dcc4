//! Shared request/response shapes

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of an update record.
///
/// Distinguishes "leave unchanged" (`Missing`, never serialized) from
/// "clear the stored value" (`Null`, serialized as JSON `null`). Fields using
/// it must be annotated with
/// `#[serde(default, skip_serializing_if = "Patch::is_missing")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }

    /// `None` maps to an explicit clear, not to "unchanged".
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(value) => value.serialize(serializer),
            // Missing only reaches here if the field lacks skip_serializing_if.
            Patch::Null | Patch::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Patch::from_option(Option::<T>::deserialize(deserializer)?))
    }
}

/// Status message returned by endpoints that do not echo a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// Offset pagination accepted by list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Update {
        #[serde(default, skip_serializing_if = "Patch::is_missing")]
        note: Patch<String>,
        #[serde(default, skip_serializing_if = "Patch::is_missing")]
        flag: Patch<bool>,
    }

    #[test]
    fn test_missing_field_is_omitted() {
        let update = Update { note: Patch::Missing, flag: Patch::Value(false) };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"flag": false}));
    }

    #[test]
    fn test_null_field_is_sent_as_null() {
        let update = Update { note: Patch::Null, flag: Patch::Missing };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"note": null}));
    }

    #[test]
    fn test_deserialize_distinguishes_absent_from_null() {
        let update: Update = serde_json::from_value(json!({"note": null})).unwrap();
        assert_eq!(update.note, Patch::Null);
        assert_eq!(update.flag, Patch::Missing);
    }

    #[test]
    fn test_option_conversion_means_clear() {
        assert_eq!(Patch::<u8>::from_option(None), Patch::Null);
        assert_eq!(Patch::from_option(Some(3)), Patch::Value(3));
        assert_eq!(Patch::from(3), Patch::Value(3));
    }
}
