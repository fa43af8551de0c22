use crate::domain::query::{PageRequest, SortSpec};

pub const EQUIPMENT_SORTABLE_FIELDS: &[&str] = &["name", "type", "room_id"];

#[derive(Debug, Clone, Default)]
pub struct GetEquipmentFilter {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub room_id: Option<String>,
    pub page: PageRequest,
    pub sort: Vec<SortSpec>,
}
