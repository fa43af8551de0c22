use crate::domain::query::{PageRequest, SortSpec};

pub const ROOM_SORTABLE_FIELDS: &[&str] = &["name"];

#[derive(Debug, Clone, Default)]
pub struct GetRoomsFilter {
    pub name: Option<String>,
    pub page: PageRequest,
    pub sort: Vec<SortSpec>,
}

/// `room` is either the room's identifier or its name.
#[derive(Debug, Clone)]
pub struct GetRoomEquipmentInput {
    pub room: String,
    pub page: PageRequest,
}
