use std::{cmp::Ordering, collections::HashMap, sync::Arc};

use bson::{Bson, Document};
use tokio::sync::RwLock;

use super::filters::filter_value;
use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{DocumentId, Filter, SortDirection, SortSpec, filter::ID_FIELD},
    store::{
        ports::DocumentStore,
        value_objects::{Collection, FindQuery},
    },
};

/// Process-local document store evaluating the same filter trees the MongoDB
/// adapter compiles. Documents are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<Document>>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

impl DocumentStore for InMemoryDocumentStore {
    async fn find(&self, collection: Collection, query: FindQuery) -> Result<Vec<Document>, CoreError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        let mut found: Vec<&Document> = documents
            .iter()
            .filter(|document| matches(document, &query.filter))
            .collect();
        found.sort_by(|a, b| compare_documents(a, b, &query.sort));

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let limit = query
            .limit
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(usize::MAX);

        Ok(found.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn find_one(&self, collection: Collection, filter: Filter) -> Result<Option<Document>, CoreError> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .and_then(|documents| documents.iter().find(|document| matches(document, &filter)))
            .cloned())
    }

    async fn insert_one(&self, collection: Collection, document: Document) -> Result<(), CoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if let Some(id) = document.get(ID_FIELD) {
            if documents.iter().any(|existing| existing.get(ID_FIELD) == Some(id)) {
                return Err(CoreError::Store(format!(
                    "duplicate key {id} in collection {collection}"
                )));
            }
        }

        documents.push(document);
        Ok(())
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> Result<bool, CoreError> {
        let mut collections = self.collections.write().await;
        let Some(document) = find_by_id(collections.get_mut(&collection), id) else {
            return Ok(false);
        };

        for (key, value) in fields {
            document.insert(key, value);
        }

        Ok(true)
    }

    async fn replace_one(
        &self,
        collection: Collection,
        id: DocumentId,
        replacement: Document,
    ) -> Result<bool, CoreError> {
        let mut collections = self.collections.write().await;
        let Some(document) = find_by_id(collections.get_mut(&collection), id) else {
            return Ok(false);
        };

        let mut replaced = Document::new();
        replaced.insert(ID_FIELD, id.object_id());
        for (key, value) in replacement {
            if key != ID_FIELD {
                replaced.insert(key, value);
            }
        }
        *document = replaced;

        Ok(true)
    }

    async fn delete_one(&self, collection: Collection, id: DocumentId) -> Result<bool, CoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(false);
        };

        let key = Bson::ObjectId(id.object_id());
        match documents.iter().position(|document| document.get(ID_FIELD) == Some(&key)) {
            Some(index) => {
                documents.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

fn find_by_id(documents: Option<&mut Vec<Document>>, id: DocumentId) -> Option<&mut Document> {
    let key = Bson::ObjectId(id.object_id());
    documents?
        .iter_mut()
        .find(|document| document.get(ID_FIELD) == Some(&key))
}

pub(crate) fn matches(document: &Document, filter: &Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Eq(field, value) => {
            let value = filter_value(value);
            candidates(document, field).iter().any(|candidate| values_equal(candidate, &value))
        }
        Filter::Ne(field, value) => !matches(document, &Filter::Eq(field.clone(), value.clone())),
        Filter::Gte(field, value) => compares(document, field, &filter_value(value), |o| o.is_ge()),
        Filter::Lte(field, value) => compares(document, field, &filter_value(value), |o| o.is_le()),
        Filter::In(field, values) => {
            let values: Vec<Bson> = values.iter().map(filter_value).collect();
            candidates(document, field)
                .iter()
                .any(|candidate| values.iter().any(|value| values_equal(candidate, value)))
        }
        Filter::NonEmptyArray(field) => {
            matches!(lookup(document, field), Some(Bson::Array(items)) if !items.is_empty())
        }
        Filter::And(clauses) => clauses.iter().all(|clause| matches(document, clause)),
        Filter::Or(clauses) => clauses.iter().any(|clause| matches(document, clause)),
    }
}

fn compares(document: &Document, field: &str, value: &Bson, accept: fn(Ordering) -> bool) -> bool {
    candidates(document, field)
        .iter()
        .any(|candidate| compare_same_type(candidate, value).is_some_and(accept))
}

/// Value found at a dotted path; numeric segments index into arrays.
fn lookup<'a>(document: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Bson::Document(inner) => inner.get(segment)?,
            Bson::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Values an equality or range probe on `path` is tested against: the value
/// itself and, for arrays, each element.
fn candidates<'a>(document: &'a Document, path: &str) -> Vec<&'a Bson> {
    let Some(value) = lookup(document, path) else {
        return Vec::new();
    };

    match value {
        Bson::Array(items) => items.iter().chain(std::iter::once(value)).collect(),
        _ => vec![value],
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(i) => Some(f64::from(*i)),
        Bson::Int64(i) => Some(*i as f64),
        Bson::Double(d) => Some(*d),
        _ => None,
    }
}

fn values_equal(a: &Bson, b: &Bson) -> bool {
    match (as_number(a), as_number(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Ordering within one type bracket; values of different types never compare.
fn compare_same_type(a: &Bson, b: &Bson) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return x.partial_cmp(&y);
    }

    match (a, b) {
        (Bson::String(x), Bson::String(y)) => Some(x.cmp(y)),
        (Bson::DateTime(x), Bson::DateTime(y)) => Some(x.cmp(y)),
        (Bson::ObjectId(x), Bson::ObjectId(y)) => Some(x.cmp(y)),
        (Bson::Boolean(x), Bson::Boolean(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        None | Some(Bson::Null) => 0,
        Some(Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_)) => 1,
        Some(Bson::String(_)) => 2,
        Some(Bson::Document(_)) => 3,
        Some(Bson::Array(_)) => 4,
        Some(Bson::ObjectId(_)) => 5,
        Some(Bson::Boolean(_)) => 6,
        Some(Bson::DateTime(_)) => 7,
        Some(_) => 8,
    }
}

fn compare_documents(a: &Document, b: &Document, sort: &[SortSpec]) -> Ordering {
    for spec in sort {
        let left = lookup(a, &spec.field);
        let right = lookup(b, &spec.field);

        let ordering = type_rank(left).cmp(&type_rank(right)).then_with(|| {
            match (left, right) {
                (Some(x), Some(y)) => compare_same_type(x, y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        });

        let ordering = match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use bson::doc;
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::domain::query::{DateRange, ListQuery, PageRequest, TimeField};

    const INTERVAL: TimeField = TimeField::Interval {
        start: "start_time",
        end: "end_time",
    };

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, day, hour, 0, 0).unwrap()
    }

    fn record(name: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Document {
        doc! {
            "_id": DocumentId::generate().object_id(),
            "room_name": name,
            "start_time": bson::DateTime::from_chrono(start),
            "end_time": bson::DateTime::from_chrono(end),
        }
    }

    async fn seeded(documents: Vec<Document>) -> InMemoryDocumentStore {
        let store = InMemoryDocumentStore::new();
        for document in documents {
            store.insert_one(Collection::Records, document).await.unwrap();
        }
        store
    }

    fn names(documents: &[Document]) -> Vec<&str> {
        documents
            .iter()
            .map(|document| document.get_str("room_name").unwrap())
            .collect()
    }

    #[test]
    fn equality_reaches_into_nested_documents_and_arrays() {
        let document = doc! {
            "name": "Cam1",
            "additional": { "room_id": "504" },
            "keywords": ["lecture", "math"],
        };

        assert!(matches(&document, &Filter::eq("additional.room_id", "504")));
        assert!(matches(&document, &Filter::eq("keywords", "math")));
        assert!(matches(&document, &Filter::eq("keywords.0", "lecture")));
        assert!(!matches(&document, &Filter::eq("additional.room_id", "505")));
        assert!(matches(&document, &Filter::non_empty_array("keywords")));
        assert!(!matches(&doc! { "keywords": [] }, &Filter::non_empty_array("keywords")));
    }

    #[test]
    fn not_equal_matches_missing_fields() {
        assert!(matches(&doc! { "name": "504" }, &Filter::ne("type", "Autorecord")));
        assert!(!matches(&doc! { "type": "Autorecord" }, &Filter::ne("type", "Autorecord")));
    }

    #[test]
    fn numbers_compare_across_widths() {
        let document = doc! { "ruz_lesson_oid": 42_i32 };
        assert!(matches(&document, &Filter::eq("ruz_lesson_oid", 42_i64)));
        assert!(matches(&document, &Filter::gte("ruz_lesson_oid", 40_i64)));
    }

    #[test]
    fn range_operators_never_match_across_types() {
        let document = doc! { "start_time": "2021-01-05 10:00" };
        assert!(!matches(&document, &Filter::gte("start_time", at(1, 0))));
    }

    #[tokio::test]
    async fn interval_overlap_returns_only_intersecting_records() {
        let store = seeded(vec![
            record("before", at(1, 8), at(1, 9)),
            record("ends-inside", at(2, 9), at(3, 11)),
            record("spans", at(2, 0), at(9, 0)),
            record("starts-inside", at(4, 10), at(12, 0)),
            record("inside", at(4, 10), at(4, 12)),
            record("after", at(20, 0), at(20, 1)),
        ])
        .await;

        let (from, to) = (at(3, 10), at(5, 0));
        let query = ListQuery::new(PageRequest::default())
            .within(&DateRange::between(from, to), INTERVAL)
            .into_find_query();
        let found = store.find(Collection::Records, query).await.unwrap();

        assert_eq!(names(&found), vec!["ends-inside", "spans", "starts-inside", "inside"]);
        for document in &found {
            let start = document.get_datetime("start_time").unwrap().to_chrono();
            let end = document.get_datetime("end_time").unwrap().to_chrono();
            assert!(start <= to && end >= from);
        }
    }

    #[tokio::test]
    async fn reversed_bounds_select_the_same_records() {
        let store = seeded(vec![
            record("a", at(2, 9), at(3, 11)),
            record("b", at(20, 0), at(20, 1)),
        ])
        .await;

        let forward = ListQuery::new(PageRequest::default())
            .within(&DateRange::between(at(3, 0), at(5, 0)), INTERVAL)
            .into_find_query();
        let reversed = ListQuery::new(PageRequest::default())
            .within(&DateRange::between(at(5, 0), at(3, 0)), INTERVAL)
            .into_find_query();

        assert_eq!(
            store.find(Collection::Records, forward).await.unwrap(),
            store.find(Collection::Records, reversed).await.unwrap()
        );
    }

    #[tokio::test]
    async fn consecutive_pages_are_disjoint_and_cover_everything() {
        let store = seeded(
            (1..=23)
                .map(|day| record(&format!("r{day}"), at(day, 8), at(day, 9)))
                .collect(),
        )
        .await;

        let everything = store
            .find(
                Collection::Records,
                ListQuery::new(PageRequest::new(None, Some(100))).into_find_query(),
            )
            .await
            .unwrap();
        assert_eq!(everything.len(), 23);

        let mut paged = Vec::new();
        for page_number in 0..3 {
            let query = ListQuery::new(PageRequest::new(Some(page_number), Some(10))).into_find_query();
            let page = store.find(Collection::Records, query).await.unwrap();
            assert!(page.iter().all(|document| !paged.contains(document)));
            paged.extend(page);
        }

        assert_eq!(paged, everything);
    }

    #[tokio::test]
    async fn sorts_by_field_then_insertion_order() {
        let store = seeded(vec![
            record("early", at(1, 8), at(1, 9)),
            record("late", at(9, 8), at(9, 9)),
            record("late-twin", at(9, 8), at(9, 9)),
        ])
        .await;

        let query = ListQuery::new(PageRequest::default())
            .sorted_by(Vec::new(), vec![SortSpec::desc("start_time")])
            .into_find_query();
        let found = store.find(Collection::Records, query).await.unwrap();

        assert_eq!(names(&found), vec!["late", "late-twin", "early"]);
    }

    #[tokio::test]
    async fn mutations_address_documents_by_id() {
        let id = DocumentId::generate();
        let store = InMemoryDocumentStore::new();
        store
            .insert_one(Collection::Rooms, doc! { "_id": id.object_id(), "name": "504" })
            .await
            .unwrap();

        assert!(
            store
                .update_fields(Collection::Rooms, id, doc! { "additional": { "drive": "url1" } })
                .await
                .unwrap()
        );
        assert!(
            store
                .replace_one(Collection::Rooms, id, doc! { "name": "505" })
                .await
                .unwrap()
        );
        assert_eq!(
            store.find_one(Collection::Rooms, Filter::id(id)).await.unwrap(),
            Some(doc! { "_id": id.object_id(), "name": "505" })
        );

        assert!(store.delete_one(Collection::Rooms, id).await.unwrap());
        assert!(!store.delete_one(Collection::Rooms, id).await.unwrap());
        assert_eq!(store.len(Collection::Rooms).await, 0);
    }
}
