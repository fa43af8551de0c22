use bson::{Document, doc};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        query::FilterValue,
        record::entities::{RecordFields, RecordKind},
        store::entities::DocumentFields,
    },
    infrastructure::documents::{
        FieldReader, ensure_filled, ensure_ordered, insert_extra, insert_opt, timestamp_bson,
    },
};

const KNOWN_FIELDS: &[&str] = &[
    "room_name",
    "start_time",
    "end_time",
    "type",
    "url",
    "emotions_url",
    "camera_ip",
    "keywords",
    "date",
];

impl DocumentFields for RecordFields {
    fn from_document(document: &Document) -> Result<Self, CoreError> {
        let reader = FieldReader::new(document, "Record");

        let kind = match reader.opt_string("type") {
            Some(raw) => Some(RecordKind::parse(&raw).ok_or_else(|| {
                CoreError::MalformedDocument(format!("Record type '{raw}' is unknown"))
            })?),
            None => None,
        };

        Ok(RecordFields {
            room_name: reader.string("room_name")?,
            start_time: reader.timestamp("start_time")?,
            end_time: reader.timestamp("end_time")?,
            kind,
            url: reader.opt_string("url"),
            emotions_url: reader.opt_string("emotions_url"),
            camera_ip: reader.opt_string("camera_ip"),
            keywords: reader.strings("keywords")?,
            extra: reader.extra(KNOWN_FIELDS),
        })
    }

    fn into_document(self) -> Document {
        let mut document = doc! {
            "room_name": self.room_name,
            "start_time": timestamp_bson(self.start_time),
            "end_time": timestamp_bson(self.end_time),
        };
        insert_opt(&mut document, "type", self.kind.map(|kind| kind.as_str()));
        insert_opt(&mut document, "url", self.url);
        insert_opt(&mut document, "emotions_url", self.emotions_url);
        insert_opt(&mut document, "camera_ip", self.camera_ip);
        document.insert("keywords", self.keywords);
        insert_extra(&mut document, self.extra);
        document
    }

    fn validate(&self) -> Result<(), CoreError> {
        ensure_filled("Record", "room_name", &self.room_name)?;
        ensure_ordered("Record", self.start_time, self.end_time)
    }

    /// Only a non-blank url identifies a record.
    fn secondary_key(&self) -> Option<(&'static str, FilterValue)> {
        self.published_url().map(|url| ("url", FilterValue::from(url)))
    }
}
