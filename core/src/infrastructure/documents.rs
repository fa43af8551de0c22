//! Typed access to loosely-shaped stored documents.

use std::collections::BTreeMap;

use bson::{Bson, Document};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{date_range::parse_timestamp, filter::ID_FIELD, normalize::NORMALIZED_ID_FIELD},
};

/// Older documents keep the day here and only the time of day in the
/// timestamp fields.
const LEGACY_DATE_FIELD: &str = "date";

pub struct FieldReader<'a> {
    document: &'a Document,
    entity: &'static str,
}

impl<'a> FieldReader<'a> {
    pub fn new(document: &'a Document, entity: &'static str) -> Self {
        Self { document, entity }
    }

    fn malformed(&self, key: &str, problem: &str) -> CoreError {
        CoreError::MalformedDocument(format!("{} field '{key}' {problem}", self.entity))
    }

    pub fn string(&self, key: &str) -> Result<String, CoreError> {
        self.opt_string(key)
            .ok_or_else(|| self.malformed(key, "is missing or not a string"))
    }

    /// Scalars written by older clients as numbers are read back as text.
    pub fn opt_string(&self, key: &str) -> Option<String> {
        match self.document.get(key)? {
            Bson::String(s) => Some(s.clone()),
            Bson::Int32(i) => Some(i.to_string()),
            Bson::Int64(i) => Some(i.to_string()),
            _ => None,
        }
    }

    pub fn int(&self, key: &str) -> Result<i64, CoreError> {
        self.opt_int(key)
            .ok_or_else(|| self.malformed(key, "is missing or not an integer"))
    }

    pub fn opt_int(&self, key: &str) -> Option<i64> {
        match self.document.get(key)? {
            Bson::Int32(i) => Some(i64::from(*i)),
            Bson::Int64(i) => Some(*i),
            Bson::Double(d) if d.fract() == 0.0 => Some(*d as i64),
            Bson::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn strings(&self, key: &str) -> Result<Vec<String>, CoreError> {
        match self.document.get(key) {
            None | Some(Bson::Null) => Ok(Vec::new()),
            Some(Bson::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Bson::String(s) => Ok(s.clone()),
                    _ => Err(self.malformed(key, "holds a non-string element")),
                })
                .collect(),
            Some(_) => Err(self.malformed(key, "is not an array")),
        }
    }

    pub fn string_map(&self, key: &str) -> Result<BTreeMap<String, String>, CoreError> {
        match self.document.get(key) {
            None | Some(Bson::Null) => Ok(BTreeMap::new()),
            Some(Bson::Document(inner)) => Ok(inner
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        Bson::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), value)
                })
                .collect()),
            Some(_) => Err(self.malformed(key, "is not a document")),
        }
    }

    /// Native timestamps, or legacy textual ones. A bare time of day is
    /// placed on the document's legacy `date`.
    pub fn timestamp(&self, key: &str) -> Result<DateTime<Utc>, CoreError> {
        self.opt_timestamp(key)
            .ok_or_else(|| self.malformed(key, "is missing or not a timestamp"))
    }

    pub fn opt_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.document.get(key)? {
            Bson::DateTime(dt) => Some(dt.to_chrono()),
            Bson::String(s) => parse_timestamp(s).or_else(|| self.on_legacy_date(s)),
            _ => None,
        }
    }

    fn on_legacy_date(&self, time: &str) -> Option<DateTime<Utc>> {
        let date = self.document.get_str(LEGACY_DATE_FIELD).ok()?;
        parse_timestamp(&format!("{}T{}", date.trim(), time.trim()))
    }

    /// Every field that is neither the key nor one of `known`.
    pub fn extra(&self, known: &[&str]) -> Map<String, Value> {
        self.document
            .iter()
            .filter(|(key, _)| {
                key.as_str() != ID_FIELD
                    && key.as_str() != NORMALIZED_ID_FIELD
                    && !known.contains(&key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone().into_relaxed_extjson()))
            .collect()
    }
}

pub fn ensure_filled(entity: &str, field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{entity} {field} cannot be empty")));
    }
    Ok(())
}

pub fn ensure_ordered(entity: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::Validation(format!(
            "{entity} cannot end before it starts"
        )));
    }
    Ok(())
}

pub fn timestamp_bson(value: DateTime<Utc>) -> Bson {
    Bson::DateTime(bson::DateTime::from_chrono(value))
}

pub fn string_map_bson(map: BTreeMap<String, String>) -> Bson {
    Bson::Document(map.into_iter().map(|(k, v)| (k, Bson::String(v))).collect())
}

pub fn insert_opt(document: &mut Document, key: &str, value: Option<impl Into<Bson>>) {
    if let Some(value) = value {
        document.insert(key, value.into());
    }
}

/// Writes passthrough fields back at the top level. Known fields already in
/// `document` are never overwritten.
pub fn insert_extra(document: &mut Document, extra: Map<String, Value>) {
    for (key, value) in extra {
        if key == ID_FIELD || key == NORMALIZED_ID_FIELD || document.contains_key(&key) {
            continue;
        }
        let value = bson::to_bson(&value).unwrap_or_else(|_| Bson::String(value.to_string()));
        document.insert(key, value);
    }
}
