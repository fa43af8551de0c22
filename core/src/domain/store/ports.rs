use bson::Document;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{DocumentId, Filter},
    store::value_objects::{Collection, FindQuery},
};

/// Collection-level access to the document store.
///
/// Documents cross this port in their store-native shape (`_id` included);
/// normalization happens above it. Implementations convert driver failures to
/// [`CoreError::Store`].
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    fn find(
        &self,
        collection: Collection,
        query: FindQuery,
    ) -> impl Future<Output = Result<Vec<Document>, CoreError>> + Send;

    fn find_one(
        &self,
        collection: Collection,
        filter: Filter,
    ) -> impl Future<Output = Result<Option<Document>, CoreError>> + Send;

    fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Sets the given top-level fields. Returns `false` when no document has `id`.
    fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Atomically swaps the body of the document with `id`, keeping its key.
    fn replace_one(
        &self,
        collection: Collection,
        id: DocumentId,
        document: Document,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn delete_one(
        &self,
        collection: Collection,
        id: DocumentId,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn ping(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
