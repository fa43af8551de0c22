use erudite_core::domain::discipline::entities::DisciplineFields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidateEmail, ValidationError};

fn validate_emails(emails: &[String]) -> Result<(), ValidationError> {
    if emails.iter().all(|email| email.validate_email()) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("emails must be valid addresses".into()))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct DisciplineValidator {
    #[validate(length(min = 1, message = "course_code is required"))]
    pub course_code: String,

    #[serde(default)]
    pub groups: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_emails"))]
    pub emails: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<DisciplineValidator> for DisciplineFields {
    fn from(payload: DisciplineValidator) -> Self {
        DisciplineFields {
            course_code: payload.course_code,
            groups: payload.groups,
            emails: payload.emails,
            extra: payload.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extra_fields_pass_through() {
        let payload: DisciplineValidator = serde_json::from_value(json!({
            "course_code": "CS101",
            "groups": ["BPI-191"],
            "drive_folder": "https://drive.example/cs101"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());

        let fields = DisciplineFields::from(payload);
        assert_eq!(fields.extra.get("drive_folder"), Some(&json!("https://drive.example/cs101")));
        assert!(fields.emails.is_empty());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let payload: DisciplineValidator = serde_json::from_value(json!({
            "course_code": "CS101",
            "emails": ["lecturer@hse.ru", "not-an-address"]
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
