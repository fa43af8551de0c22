use std::collections::BTreeMap;

use erudite_core::domain::room::entities::RoomFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both `POST /rooms` and `PUT /rooms/{room_id}`.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RoomValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub additional: BTreeMap<String, String>,
}

impl From<RoomValidator> for RoomFields {
    fn from(payload: RoomValidator) -> Self {
        RoomFields {
            name: payload.name,
            additional: payload.additional,
        }
    }
}
