use bson::{Document, doc};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        discipline::entities::DisciplineFields,
        query::FilterValue,
        store::entities::DocumentFields,
    },
    infrastructure::documents::{FieldReader, ensure_filled, insert_extra},
};

const KNOWN_FIELDS: &[&str] = &["course_code", "groups", "emails"];

impl DocumentFields for DisciplineFields {
    fn from_document(document: &Document) -> Result<Self, CoreError> {
        let reader = FieldReader::new(document, "Discipline");

        Ok(DisciplineFields {
            course_code: reader.string("course_code")?,
            groups: reader.strings("groups")?,
            emails: reader.strings("emails")?,
            extra: reader.extra(KNOWN_FIELDS),
        })
    }

    fn into_document(self) -> Document {
        let mut document = doc! {
            "course_code": self.course_code,
            "groups": self.groups,
            "emails": self.emails,
        };
        insert_extra(&mut document, self.extra);
        document
    }

    fn validate(&self) -> Result<(), CoreError> {
        ensure_filled("Discipline", "course_code", &self.course_code)
    }

    fn secondary_key(&self) -> Option<(&'static str, FilterValue)> {
        Some(("course_code", FilterValue::from(self.course_code.as_str())))
    }
}
