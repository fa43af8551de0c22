use bson::Document;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{DocumentId, FilterValue, normalize, normalize::NORMALIZED_ID_FIELD},
};

/// The typed body of a stored document, everything except its key.
pub trait DocumentFields: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    fn from_document(document: &Document) -> Result<Self, CoreError>;

    fn into_document(self) -> Document;

    fn validate(&self) -> Result<(), CoreError> {
        Ok(())
    }

    /// Field expected to be unique across the collection, if any, with the
    /// value this document holds for it.
    fn secondary_key(&self) -> Option<(&'static str, FilterValue)> {
        None
    }
}

/// A document as handed to callers: string identifier plus typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Stored<T>
where
    T: DocumentFields,
{
    pub fn new(id: DocumentId, fields: T) -> Self {
        Self {
            id: id.to_hex(),
            fields,
        }
    }

    pub fn from_document(document: Document) -> Result<Self, CoreError> {
        let document = normalize(document);
        let id = document
            .get_str(NORMALIZED_ID_FIELD)
            .map_err(|_| CoreError::MalformedDocument("document has no identifier".to_string()))?
            .to_string();
        let fields = T::from_document(&document)?;

        Ok(Self { id, fields })
    }
}
