use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    query::{DateRange, DocumentId, Filter, FilterValue, ListQuery, SortSpec, SuppliedArgs, TimeField},
    record::{
        entities::{Record, RecordFields, RecordKind},
        ports::RecordService,
        value_objects::{GetRecordsFilter, RECORD_SORTABLE_FIELDS},
    },
    store::{
        entities::DocumentFields, ports::DocumentStore, services as store,
        value_objects::Collection,
    },
};

pub const RECORD_TIME: TimeField = TimeField::Interval {
    start: "start_time",
    end: "end_time",
};

impl<S> Service<S>
where
    S: DocumentStore,
{
    async fn ensure_no_overlapping_autorecord(&self, fields: &RecordFields) -> Result<(), CoreError> {
        if !fields.is_autorecord() {
            return Ok(());
        }

        let filter = Filter::and([
            Filter::eq("room_name", fields.room_name.as_str()),
            fields
                .camera_ip
                .as_deref()
                .map_or(Filter::All, |camera_ip| Filter::eq("camera_ip", camera_ip)),
            DateRange::between(fields.start_time, fields.end_time).compile(RECORD_TIME),
        ]);

        if self.store.find_one(Collection::Records, filter).await?.is_some() {
            info!(room_name = %fields.room_name, "overlapping autorecord rejected");
            return Err(CoreError::Conflict(
                "Record that was done in the same room, by the same camera, at the same time already exists in the database"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

impl<S> RecordService for Service<S>
where
    S: DocumentStore,
{
    async fn get_records(&self, filter: GetRecordsFilter) -> Result<Vec<Record>, CoreError> {
        let args = SuppliedArgs::collect([
            ("room_name", filter.room_name.map(FilterValue::from)),
            ("url", filter.url.map(FilterValue::from)),
            ("camera_ip", filter.camera_ip.map(FilterValue::from)),
            ("type", filter.kind.map(|kind| FilterValue::from(kind.as_str()))),
        ]);

        let mut query = ListQuery::new(filter.page)
            .matching(args)
            .within(&filter.dates, RECORD_TIME)
            .sorted_by(
                SortSpec::retain_sortable(filter.sort, RECORD_SORTABLE_FIELDS),
                vec![SortSpec::desc("start_time")],
            );

        if filter.ignore_autorec {
            query = query.filtered(Filter::ne("type", RecordKind::Autorecord.as_str()));
        }
        if filter.with_keywords_only {
            query = query.filtered(Filter::non_empty_array("keywords"));
        }

        store::list(&self.store, Collection::Records, query).await
    }

    async fn get_record(&self, record_id: DocumentId) -> Result<Record, CoreError> {
        store::load(&self.store, Collection::Records, record_id).await
    }

    async fn create_record(&self, fields: RecordFields) -> Result<Record, CoreError> {
        fields.validate()?;
        self.ensure_no_overlapping_autorecord(&fields).await?;
        store::create(&self.store, Collection::Records, fields).await
    }

    async fn replace_record(&self, record_id: DocumentId, fields: RecordFields) -> Result<Record, CoreError> {
        store::replace(&self.store, Collection::Records, record_id, fields).await
    }

    async fn patch_record(&self, record_id: DocumentId, changes: Map<String, Value>) -> Result<Record, CoreError> {
        store::patch(&self.store, Collection::Records, record_id, changes).await
    }

    async fn delete_record(&self, record_id: DocumentId) -> Result<DocumentId, CoreError> {
        store::delete(&self.store, Collection::Records, record_id).await
    }
}
