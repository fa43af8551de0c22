use std::collections::BTreeMap;

use erudite_core::domain::equipment::entities::EquipmentFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EquipmentValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub kind: String,

    #[serde(default)]
    pub room_id: Option<String>,

    #[serde(default)]
    pub additional: BTreeMap<String, String>,
}

impl From<EquipmentValidator> for EquipmentFields {
    fn from(payload: EquipmentValidator) -> Self {
        EquipmentFields {
            name: payload.name,
            kind: payload.kind,
            room_id: payload.room_id.filter(|room| !room.trim().is_empty()),
            additional: payload.additional,
        }
    }
}
