use bson::Document;
use tracing::debug;

use super::{normalize::normalize, page::ListQuery};
use crate::domain::{
    common::entities::app_errors::CoreError,
    store::{ports::DocumentStore, value_objects::Collection},
};

/// Runs a list query against one collection and returns the normalized page.
///
/// No match is an empty page, not an error. Store failures are propagated
/// unchanged.
pub async fn fetch_page<S>(
    store: &S,
    collection: Collection,
    query: ListQuery,
) -> Result<Vec<Document>, CoreError>
where
    S: DocumentStore,
{
    let find = query.into_find_query();
    debug!(
        %collection,
        filter = ?find.filter,
        skip = find.skip,
        limit = ?find.limit,
        "fetching page"
    );

    let documents = store.find(collection, find).await?;

    Ok(documents.into_iter().map(normalize).collect())
}
