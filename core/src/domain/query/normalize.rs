use bson::{Bson, Document};

use super::filter::ID_FIELD;

/// Field that carries the primary key once a document has been normalized.
pub const NORMALIZED_ID_FIELD: &str = "id";

/// Restates the store-native primary key as a plain string `id` field.
///
/// Every other field passes through untouched. A document without `_id` is
/// considered already normalized and is returned as is.
pub fn normalize(mut document: Document) -> Document {
    let Some(raw_id) = document.remove(ID_FIELD) else {
        return document;
    };

    let mut normalized = Document::new();
    normalized.insert(NORMALIZED_ID_FIELD, identifier_string(raw_id));
    for (key, value) in document {
        if key != NORMALIZED_ID_FIELD {
            normalized.insert(key, value);
        }
    }

    normalized
}

fn identifier_string(raw: Bson) -> String {
    match raw {
        Bson::ObjectId(object_id) => object_id.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use bson::{doc, oid::ObjectId};

    use super::*;

    #[test]
    fn restates_object_id_as_string() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "name": "504", "additional": { "drive": "url1" } };

        let normalized = normalize(document);
        assert_eq!(
            normalized,
            doc! { "id": oid.to_hex(), "name": "504", "additional": { "drive": "url1" } }
        );
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let document = doc! { "_id": ObjectId::new(), "name": "Cam1", "type": "ONVIF" };

        let once = normalize(document);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn legacy_non_object_keys_are_stringified() {
        assert_eq!(
            normalize(doc! { "_id": 150, "name": "Презентация" }),
            doc! { "id": "150", "name": "Презентация" }
        );
        assert_eq!(
            normalize(doc! { "_id": "504", "drive": "url1" }),
            doc! { "id": "504", "drive": "url1" }
        );
    }

    #[test]
    fn primary_key_wins_over_a_stray_id_field() {
        let oid = ObjectId::new();
        let normalized = normalize(doc! { "_id": oid, "id": "spoofed" });
        assert_eq!(normalized, doc! { "id": oid.to_hex() });
    }
}
