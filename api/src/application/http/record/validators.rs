use chrono::{DateTime, Utc};
use erudite_core::domain::{
    query::date_range::deserialize_timestamp,
    record::entities::{RecordFields, RecordKind},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

fn validate_interval(record: &RecordValidator) -> Result<(), ValidationError> {
    if record.end_time < record.start_time {
        return Err(ValidationError::new("interval")
            .with_message("end_time must not be earlier than start_time".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_interval"))]
pub struct RecordValidator {
    #[validate(length(min = 1, message = "room_name is required"))]
    pub room_name: String,

    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,

    #[serde(rename = "type", default)]
    pub kind: Option<RecordKind>,

    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub emotions_url: Option<String>,
    #[serde(default)]
    pub camera_ip: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<RecordValidator> for RecordFields {
    fn from(payload: RecordValidator) -> Self {
        RecordFields {
            room_name: payload.room_name,
            start_time: payload.start_time,
            end_time: payload.end_time,
            kind: payload.kind,
            url: payload.url,
            emotions_url: payload.emotions_url,
            camera_ip: payload.camera_ip,
            keywords: payload.keywords,
            extra: payload.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn display_names_are_accepted_for_type() {
        let payload: RecordValidator = serde_json::from_value(json!({
            "room_name": "504",
            "start_time": "2021-03-01T09:30:00Z",
            "end_time": "2021-03-01T10:50:00Z",
            "type": "MS Teams"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.kind, Some(RecordKind::MsTeams));
    }

    #[test]
    fn unknown_type_fails_to_parse() {
        let payload = serde_json::from_value::<RecordValidator>(json!({
            "room_name": "504",
            "start_time": "2021-03-01T09:30:00Z",
            "end_time": "2021-03-01T10:50:00Z",
            "type": "Skype"
        }));

        assert!(payload.is_err());
    }
}
