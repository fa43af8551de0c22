use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::DocumentId,
    record::{
        entities::{Record, RecordFields},
        value_objects::GetRecordsFilter,
    },
};

pub trait RecordService: Send + Sync {
    fn get_records(
        &self,
        filter: GetRecordsFilter,
    ) -> impl Future<Output = Result<Vec<Record>, CoreError>> + Send;

    fn get_record(
        &self,
        record_id: DocumentId,
    ) -> impl Future<Output = Result<Record, CoreError>> + Send;

    /// Rejects a duplicate url and an automatic recording overlapping one
    /// already made by the same camera in the same room.
    fn create_record(
        &self,
        fields: RecordFields,
    ) -> impl Future<Output = Result<Record, CoreError>> + Send;

    fn replace_record(
        &self,
        record_id: DocumentId,
        fields: RecordFields,
    ) -> impl Future<Output = Result<Record, CoreError>> + Send;

    fn patch_record(
        &self,
        record_id: DocumentId,
        changes: Map<String, Value>,
    ) -> impl Future<Output = Result<Record, CoreError>> + Send;

    fn delete_record(
        &self,
        record_id: DocumentId,
    ) -> impl Future<Output = Result<DocumentId, CoreError>> + Send;
}
