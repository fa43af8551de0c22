use bson::{Document, doc};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        equipment::entities::EquipmentFields,
        query::FilterValue,
        store::entities::DocumentFields,
    },
    infrastructure::documents::{FieldReader, ensure_filled, insert_opt, string_map_bson},
};

impl DocumentFields for EquipmentFields {
    fn from_document(document: &Document) -> Result<Self, CoreError> {
        let reader = FieldReader::new(document, "Equipment");

        Ok(EquipmentFields {
            name: reader.string("name")?,
            kind: reader.string("type")?,
            room_id: reader.opt_string("room_id"),
            additional: reader.string_map("additional")?,
        })
    }

    fn into_document(self) -> Document {
        let mut document = doc! {
            "name": self.name,
            "type": self.kind,
        };
        insert_opt(&mut document, "room_id", self.room_id);
        document.insert("additional", string_map_bson(self.additional));
        document
    }

    fn validate(&self) -> Result<(), CoreError> {
        ensure_filled("Equipment", "name", &self.name)?;
        ensure_filled("Equipment", "type", &self.kind)
    }

    fn secondary_key(&self) -> Option<(&'static str, FilterValue)> {
        Some(("name", FilterValue::from(self.name.as_str())))
    }
}
