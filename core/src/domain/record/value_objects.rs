use crate::domain::{
    query::{DateRange, PageRequest, SortSpec},
    record::entities::RecordKind,
};

pub const RECORD_SORTABLE_FIELDS: &[&str] = &["start_time", "end_time", "room_name", "type"];

#[derive(Debug, Clone, Default)]
pub struct GetRecordsFilter {
    pub room_name: Option<String>,
    pub url: Option<String>,
    pub camera_ip: Option<String>,
    pub kind: Option<RecordKind>,
    pub dates: DateRange,
    /// Leave out records captured automatically by room cameras.
    pub ignore_autorec: bool,
    /// Only records for which keywords were extracted.
    pub with_keywords_only: bool,
    pub page: PageRequest,
    pub sort: Vec<SortSpec>,
}
