use chrono::{DateTime, Utc};
use erudite_core::domain::{
    lesson::entities::LessonFields,
    query::date_range::deserialize_timestamp,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

fn validate_interval(lesson: &LessonValidator) -> Result<(), ValidationError> {
    if lesson.end_time < lesson.start_time {
        return Err(ValidationError::new("interval")
            .with_message("end_time must not be earlier than start_time".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_interval"))]
pub struct LessonValidator {
    #[validate(length(min = 1, message = "course_code is required"))]
    pub course_code: String,

    #[validate(length(min = 1, message = "ruz_auditorium is required"))]
    pub ruz_auditorium: String,

    #[validate(length(min = 1, message = "ruz_lecturer_title is required"))]
    pub ruz_lecturer_title: String,

    pub ruz_lesson_oid: i64,

    #[serde(default)]
    pub ruz_auditorium_oid: Option<i64>,
    #[serde(default)]
    pub ruz_building: Option<String>,
    #[serde(default)]
    pub ruz_building_oid: Option<i64>,
    #[serde(default)]
    pub ruz_discipline: Option<String>,
    #[serde(default)]
    pub ruz_discipline_oid: Option<i64>,
    #[serde(default)]
    pub ruz_kind_of_work: Option<String>,
    #[serde(default)]
    pub ruz_kind_of_work_oid: Option<i64>,
    #[serde(default)]
    #[validate(email(message = "ruz_lecturer_email must be a valid address"))]
    pub ruz_lecturer_email: Option<String>,
    #[serde(default)]
    pub ruz_url: Option<String>,

    #[serde(default)]
    pub gcalendar_event_id: Option<String>,
    #[serde(default)]
    pub gcalendar_calendar_id: Option<String>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<LessonValidator> for LessonFields {
    fn from(payload: LessonValidator) -> Self {
        LessonFields {
            course_code: payload.course_code,
            ruz_auditorium: payload.ruz_auditorium,
            ruz_lecturer_title: payload.ruz_lecturer_title,
            ruz_lesson_oid: payload.ruz_lesson_oid,
            ruz_auditorium_oid: payload.ruz_auditorium_oid,
            ruz_building: payload.ruz_building,
            ruz_building_oid: payload.ruz_building_oid,
            ruz_discipline: payload.ruz_discipline,
            ruz_discipline_oid: payload.ruz_discipline_oid,
            ruz_kind_of_work: payload.ruz_kind_of_work,
            ruz_kind_of_work_oid: payload.ruz_kind_of_work_oid,
            ruz_lecturer_email: payload.ruz_lecturer_email,
            ruz_url: payload.ruz_url,
            gcalendar_event_id: payload.gcalendar_event_id,
            gcalendar_calendar_id: payload.gcalendar_calendar_id,
            start_time: payload.start_time,
            end_time: payload.end_time,
            extra: payload.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn lesson(start: &str, end: &str) -> LessonValidator {
        serde_json::from_value(json!({
            "course_code": "CS101",
            "ruz_auditorium": "504",
            "ruz_lecturer_title": "Ivanov I.I.",
            "ruz_lesson_oid": 1200345,
            "start_time": start,
            "end_time": end,
            "ruz_group": "BPI-191"
        }))
        .unwrap()
    }

    #[test]
    fn valid_lesson_keeps_unknown_fields() {
        let payload = lesson("2021-03-01T09:30:00", "2021-03-01T10:50:00");
        assert!(payload.validate().is_ok());

        let fields = LessonFields::from(payload);
        assert_eq!(fields.extra.get("ruz_group"), Some(&json!("BPI-191")));
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let payload = lesson("2021-03-01T10:50:00", "2021-03-01T09:30:00");
        assert!(payload.validate().is_err());
    }
}
