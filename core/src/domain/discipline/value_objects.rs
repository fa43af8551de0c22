use crate::domain::query::{PageRequest, SortSpec};

pub const DISCIPLINE_SORTABLE_FIELDS: &[&str] = &["course_code"];

#[derive(Debug, Clone, Default)]
pub struct GetDisciplinesFilter {
    pub group: Option<String>,
    pub page: PageRequest,
    pub sort: Vec<SortSpec>,
}
