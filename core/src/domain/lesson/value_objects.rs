use crate::domain::query::{DateRange, PageRequest, SortSpec};

pub const LESSON_SORTABLE_FIELDS: &[&str] = &[
    "start_time",
    "end_time",
    "course_code",
    "ruz_auditorium",
    "ruz_lesson_oid",
];

#[derive(Debug, Clone, Default)]
pub struct GetLessonsFilter {
    pub course_code: Option<String>,
    pub ruz_auditorium: Option<String>,
    pub ruz_lecturer_email: Option<String>,
    pub ruz_lesson_oid: Option<i64>,
    pub dates: DateRange,
    pub page: PageRequest,
    pub sort: Vec<SortSpec>,
}
