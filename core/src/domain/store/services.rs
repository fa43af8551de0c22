//! CRUD steps shared by every entity service.

use std::fmt::Display;

use bson::{Bson, Document, doc};
use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{DocumentId, Filter, ListQuery, fetch_page, filter::ID_FIELD, normalize::NORMALIZED_ID_FIELD},
    store::{
        entities::{DocumentFields, Stored},
        ports::DocumentStore,
        value_objects::Collection,
    },
};

/// Map key merged key by key on PATCH instead of being replaced.
const MERGED_MAP_FIELD: &str = "additional";

pub fn not_found(collection: Collection, id: impl Display) -> CoreError {
    CoreError::NotFound(format!(
        "{}: {id} - not found in the database",
        collection.entity_name()
    ))
}

pub async fn load_document<S>(
    store: &S,
    collection: Collection,
    id: DocumentId,
) -> Result<Document, CoreError>
where
    S: DocumentStore,
{
    store
        .find_one(collection, Filter::id(id))
        .await?
        .ok_or_else(|| not_found(collection, id))
}

pub async fn load<S, T>(store: &S, collection: Collection, id: DocumentId) -> Result<Stored<T>, CoreError>
where
    S: DocumentStore,
    T: DocumentFields,
{
    Stored::from_document(load_document(store, collection, id).await?)
}

pub async fn list<S, T>(store: &S, collection: Collection, query: ListQuery) -> Result<Vec<Stored<T>>, CoreError>
where
    S: DocumentStore,
    T: DocumentFields,
{
    fetch_page(store, collection, query)
        .await?
        .into_iter()
        .map(Stored::from_document)
        .collect()
}

/// Rejects `fields` when another document (other than `except`) already
/// holds the same secondary key.
pub async fn ensure_unique<S, T>(
    store: &S,
    collection: Collection,
    fields: &T,
    except: Option<DocumentId>,
) -> Result<(), CoreError>
where
    S: DocumentStore,
    T: DocumentFields,
{
    let Some((field, value)) = fields.secondary_key() else {
        return Ok(());
    };

    let filter = Filter::and([
        Filter::eq(field, value.clone()),
        except.map_or(Filter::All, |id| Filter::ne(ID_FIELD, id)),
    ]);

    if store.find_one(collection, filter).await?.is_some() {
        info!(%collection, field, %value, "secondary key already taken");
        return Err(CoreError::Conflict(format!(
            "{} with {field}: '{value}' already exists in the database",
            collection.entity_name()
        )));
    }

    Ok(())
}

pub async fn create<S, T>(store: &S, collection: Collection, fields: T) -> Result<Stored<T>, CoreError>
where
    S: DocumentStore,
    T: DocumentFields,
{
    fields.validate()?;
    ensure_unique(store, collection, &fields, None).await?;

    let id = DocumentId::generate();
    let mut document = doc! { ID_FIELD: id.object_id() };
    for (key, value) in fields.clone().into_document() {
        document.insert(key, value);
    }
    store.insert_one(collection, document).await?;

    info!(%collection, %id, "document created");
    Ok(Stored::new(id, fields))
}

pub async fn replace<S, T>(
    store: &S,
    collection: Collection,
    id: DocumentId,
    fields: T,
) -> Result<Stored<T>, CoreError>
where
    S: DocumentStore,
    T: DocumentFields,
{
    fields.validate()?;
    load_document(store, collection, id).await?;
    ensure_unique(store, collection, &fields, Some(id)).await?;

    if !store
        .replace_one(collection, id, fields.clone().into_document())
        .await?
    {
        return Err(not_found(collection, id));
    }

    info!(%collection, %id, "document replaced");
    Ok(Stored::new(id, fields))
}

/// Merges `changes` onto the stored document, validates the result and writes
/// back only the touched fields.
pub async fn patch<S, T>(
    store: &S,
    collection: Collection,
    id: DocumentId,
    changes: Map<String, Value>,
) -> Result<Stored<T>, CoreError>
where
    S: DocumentStore,
    T: DocumentFields,
{
    check_changes(&changes)?;

    let current: Stored<T> = load(store, collection, id).await?;
    let fields: T = merge_changes(&current.fields, &changes)?;
    fields.validate()?;
    ensure_unique(store, collection, &fields, Some(id)).await?;

    let document = fields.clone().into_document();
    let set: Document = changes
        .keys()
        .map(|key| (key.clone(), document.get(key).cloned().unwrap_or(Bson::Null)))
        .collect();

    if !store.update_fields(collection, id, set).await? {
        return Err(not_found(collection, id));
    }

    info!(%collection, %id, fields = changes.len(), "document patched");
    Ok(Stored::new(id, fields))
}

pub async fn delete<S>(store: &S, collection: Collection, id: DocumentId) -> Result<DocumentId, CoreError>
where
    S: DocumentStore,
{
    if !store.delete_one(collection, id).await? {
        return Err(not_found(collection, id));
    }

    info!(%collection, %id, "document deleted");
    Ok(id)
}

fn check_changes(changes: &Map<String, Value>) -> Result<(), CoreError> {
    if changes.is_empty() {
        return Err(CoreError::Validation("Please fill the request body".to_string()));
    }

    if changes.contains_key(ID_FIELD) || changes.contains_key(NORMALIZED_ID_FIELD) {
        return Err(CoreError::Validation(
            "The identifier of a document cannot be changed".to_string(),
        ));
    }

    Ok(())
}

fn merge_changes<T>(current: &T, changes: &Map<String, Value>) -> Result<T, CoreError>
where
    T: DocumentFields,
{
    let Value::Object(mut merged) = serde_json::to_value(current)
        .map_err(|e| CoreError::MalformedDocument(e.to_string()))?
    else {
        return Err(CoreError::MalformedDocument(
            "document fields are not an object".to_string(),
        ));
    };

    for (key, value) in changes {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) if key == MERGED_MAP_FIELD => {
                existing.extend(incoming.clone());
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }

    serde_json::from_value(Value::Object(merged)).map_err(|e| CoreError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::{
        domain::room::entities::RoomFields, infrastructure::db::memory::InMemoryDocumentStore,
    };

    fn room(name: &str, drive: &str) -> RoomFields {
        RoomFields {
            name: name.to_string(),
            additional: BTreeMap::from([("drive".to_string(), drive.to_string())]),
        }
    }

    fn changes(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[tokio::test]
    async fn created_documents_read_back_unchanged() {
        let store = InMemoryDocumentStore::default();

        let created = create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();
        let loaded: Stored<RoomFields> = load(&store, Collection::Rooms, id).await.unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.fields, room("504", "url1"));
    }

    #[tokio::test]
    async fn duplicate_secondary_key_is_a_conflict() {
        let store = InMemoryDocumentStore::default();
        let original = create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();

        let err = create(&store, Collection::Rooms, room("504", "url2")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));

        let id = DocumentId::parse(&original.id).unwrap();
        let loaded: Stored<RoomFields> = load(&store, Collection::Rooms, id).await.unwrap();
        assert_eq!(loaded.fields, room("504", "url1"));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let store = InMemoryDocumentStore::default();
        let id = DocumentId::generate();

        let err = load::<_, RoomFields>(&store, Collection::Rooms, id).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        assert!(matches!(
            delete(&store, Collection::Rooms, id).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            replace(&store, Collection::Rooms, id, room("504", "url1")).await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn patch_merges_additional_key_by_key() {
        let store = InMemoryDocumentStore::default();
        let created = create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();

        let patched: Stored<RoomFields> = patch(
            &store,
            Collection::Rooms,
            id,
            changes(json!({ "additional": { "calendar": "cal1" } })),
        )
        .await
        .unwrap();

        assert_eq!(patched.fields.name, "504");
        assert_eq!(patched.fields.additional.get("drive").map(String::as_str), Some("url1"));
        assert_eq!(patched.fields.additional.get("calendar").map(String::as_str), Some("cal1"));

        let loaded: Stored<RoomFields> = load(&store, Collection::Rooms, id).await.unwrap();
        assert_eq!(loaded, patched);
    }

    #[tokio::test]
    async fn patch_rejects_empty_bodies_and_key_changes() {
        let store = InMemoryDocumentStore::default();
        let created = create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();

        let err = patch::<_, RoomFields>(&store, Collection::Rooms, id, Map::new())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Validation("Please fill the request body".to_string()));

        let err = patch::<_, RoomFields>(&store, Collection::Rooms, id, changes(json!({ "id": "x" })))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let err = patch::<_, RoomFields>(&store, Collection::Rooms, id, changes(json!({ "name": 5 })))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn replace_keeps_the_identifier() {
        let store = InMemoryDocumentStore::default();
        let created = create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();

        let replaced = replace(&store, Collection::Rooms, id, room("505", "url2")).await.unwrap();
        assert_eq!(replaced.id, created.id);

        let loaded: Stored<RoomFields> = load(&store, Collection::Rooms, id).await.unwrap();
        assert_eq!(loaded.fields, room("505", "url2"));
    }

    #[tokio::test]
    async fn replace_cannot_steal_another_secondary_key() {
        let store = InMemoryDocumentStore::default();
        create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();
        let other = create(&store, Collection::Rooms, room("505", "url2")).await.unwrap();
        let id = DocumentId::parse(&other.id).unwrap();

        let err = replace(&store, Collection::Rooms, id, room("504", "url3")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));

        // keeping its own key is fine
        replace(&store, Collection::Rooms, id, room("505", "url3")).await.unwrap();
    }

    #[tokio::test]
    async fn delete_returns_the_removed_identifier() {
        let store = InMemoryDocumentStore::default();
        let created = create(&store, Collection::Rooms, room("504", "url1")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();

        assert_eq!(delete(&store, Collection::Rooms, id).await.unwrap(), id);
        assert!(matches!(
            load::<_, RoomFields>(&store, Collection::Rooms, id).await,
            Err(CoreError::NotFound(_))
        ));
    }
}
