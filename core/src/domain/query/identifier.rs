use std::{fmt, str::FromStr};

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::info;

use crate::domain::common::entities::app_errors::CoreError;

/// Primary key of a stored document.
///
/// The store-native representation never leaves this type: it is parsed from
/// and rendered to its hexadecimal string form at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Returns `None` for anything that is not a well-formed identifier.
    pub fn parse(raw: &str) -> Option<Self> {
        match ObjectId::parse_str(raw.trim()) {
            Ok(object_id) => Some(Self(object_id)),
            Err(e) => {
                info!(identifier = raw, "ObjectId is written in the wrong format: {}", e);
                None
            }
        }
    }

    pub fn from_object_id(object_id: ObjectId) -> Self {
        Self(object_id)
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentId::parse(s).ok_or(CoreError::InvalidIdentifier)
    }
}

impl Serialize for DocumentId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DocumentId::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid identifier: {raw}")))
    }
}
