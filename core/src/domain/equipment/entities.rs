use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::store::entities::Stored;

/// Key under which older clients stored the room linkage in `additional`.
pub const LEGACY_ROOM_LINK: &str = "room_id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipmentFields {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Identifier or name of the room the device is installed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    /// IP, port, RTSP path and other device specifics.
    #[serde(default)]
    pub additional: BTreeMap<String, String>,
}

impl EquipmentFields {
    /// Moves a room link kept in `additional` into the `room_id` field.
    pub fn promote_room_link(mut self) -> Self {
        if self.room_id.is_none() {
            self.room_id = self.additional.remove(LEGACY_ROOM_LINK);
        }
        self
    }
}

pub type Equipment = Stored<EquipmentFields>;
