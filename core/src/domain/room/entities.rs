use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::store::entities::Stored;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomFields {
    pub name: String,
    /// Drive link, calendar id, tracking sources and the like.
    #[serde(default)]
    pub additional: BTreeMap<String, String>,
}

pub type Room = Stored<RoomFields>;
