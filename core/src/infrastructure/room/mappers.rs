use bson::{Document, doc};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        query::FilterValue,
        room::entities::RoomFields,
        store::entities::DocumentFields,
    },
    infrastructure::documents::{FieldReader, ensure_filled, string_map_bson},
};

impl DocumentFields for RoomFields {
    fn from_document(document: &Document) -> Result<Self, CoreError> {
        let reader = FieldReader::new(document, "Room");

        Ok(RoomFields {
            name: reader.string("name")?,
            additional: reader.string_map("additional")?,
        })
    }

    fn into_document(self) -> Document {
        doc! {
            "name": self.name,
            "additional": string_map_bson(self.additional),
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        ensure_filled("Room", "name", &self.name)
    }

    fn secondary_key(&self) -> Option<(&'static str, FilterValue)> {
        Some(("name", FilterValue::from(self.name.as_str())))
    }
}
