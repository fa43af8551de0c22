use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{query::date_range::deserialize_timestamp, store::entities::Stored};

/// A scheduled lesson mirrored from the university timetable (RUZ).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonFields {
    pub course_code: String,
    pub ruz_auditorium: String,
    pub ruz_lecturer_title: String,
    pub ruz_lesson_oid: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_auditorium_oid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_building_oid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_discipline_oid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_kind_of_work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_kind_of_work_oid: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_lecturer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruz_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcalendar_event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcalendar_calendar_id: Option<String>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type Lesson = Stored<LessonFields>;
