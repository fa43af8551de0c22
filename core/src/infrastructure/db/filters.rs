//! Compilation of store-neutral filters and sort keys into MongoDB documents.

use bson::{Bson, Document, doc};

use crate::domain::query::{Filter, FilterValue, SortDirection, SortSpec};

pub fn filter_value(value: &FilterValue) -> Bson {
    match value {
        FilterValue::String(s) => Bson::String(s.clone()),
        FilterValue::Int(i) => Bson::Int64(*i),
        FilterValue::Bool(b) => Bson::Boolean(*b),
        FilterValue::DateTime(dt) => Bson::DateTime(bson::DateTime::from_chrono(*dt)),
        FilterValue::Id(id) => Bson::ObjectId(id.object_id()),
    }
}

pub fn filter_document(filter: &Filter) -> Document {
    match filter {
        Filter::All => Document::new(),
        Filter::Eq(field, value) => doc! { field: filter_value(value) },
        Filter::Ne(field, value) => doc! { field: { "$ne": filter_value(value) } },
        Filter::Gte(field, value) => doc! { field: { "$gte": filter_value(value) } },
        Filter::Lte(field, value) => doc! { field: { "$lte": filter_value(value) } },
        Filter::In(field, values) => {
            let values: Vec<Bson> = values.iter().map(filter_value).collect();
            doc! { field: { "$in": values } }
        }
        Filter::NonEmptyArray(field) => doc! { format!("{field}.0"): { "$exists": true } },
        Filter::And(clauses) => doc! { "$and": clauses.iter().map(filter_document).collect::<Vec<_>>() },
        Filter::Or(clauses) => doc! { "$or": clauses.iter().map(filter_document).collect::<Vec<_>>() },
    }
}

pub fn sort_document(sort: &[SortSpec]) -> Document {
    sort.iter()
        .map(|spec| {
            let direction = match spec.direction {
                SortDirection::Asc => 1,
                SortDirection::Desc => -1,
            };
            (spec.field.clone(), Bson::Int32(direction))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::query::{DateRange, DocumentId, TimeField};

    #[test]
    fn match_all_is_an_empty_document() {
        assert_eq!(filter_document(&Filter::All), Document::new());
    }

    #[test]
    fn compiles_comparison_operators() {
        let filter = Filter::and([
            Filter::eq("room_name", "504"),
            Filter::ne("type", "Autorecord"),
            Filter::non_empty_array("keywords"),
        ]);

        assert_eq!(
            filter_document(&filter),
            doc! {
                "$and": [
                    { "room_name": "504" },
                    { "type": { "$ne": "Autorecord" } },
                    { "keywords.0": { "$exists": true } },
                ]
            }
        );
    }

    #[test]
    fn identifiers_become_object_ids() {
        let id = DocumentId::generate();
        assert_eq!(
            filter_document(&Filter::id(id)),
            doc! { "_id": id.object_id() }
        );
    }

    #[test]
    fn compiles_interval_overlap() {
        let from = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2021, 1, 31, 0, 0, 0).unwrap();
        let filter = DateRange::between(from, to).compile(TimeField::Interval {
            start: "start_time",
            end: "end_time",
        });

        let from = bson::DateTime::from_chrono(from);
        let to = bson::DateTime::from_chrono(to);
        assert_eq!(
            filter_document(&filter),
            doc! {
                "$or": [
                    { "$and": [ { "end_time": { "$gte": from } }, { "end_time": { "$lte": to } } ] },
                    { "$and": [ { "end_time": { "$gte": to } }, { "start_time": { "$lte": from } } ] },
                    { "$and": [ { "start_time": { "$gte": from } }, { "start_time": { "$lte": to } } ] },
                ]
            }
        );
    }

    #[test]
    fn compiles_sort_keys_in_order() {
        let sort = sort_document(&[SortSpec::desc("start_time"), SortSpec::asc("_id")]);
        assert_eq!(sort, doc! { "start_time": -1, "_id": 1 });
        assert_eq!(sort.keys().next().map(String::as_str), Some("start_time"));
    }
}
