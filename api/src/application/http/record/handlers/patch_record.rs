use axum::extract::{Path, State};
use erudite_core::domain::{
    query::DocumentId,
    record::{entities::Record, ports::RecordService},
};
use serde_json::{Map, Value};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonBody},
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type PatchRecordResponse = DataResponse<Record>;

pub async fn patch_record(
    Path(record_id): Path<String>,
    State(state): State<AppState>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Response<PatchRecordResponse>, ApiError> {
    let record_id = record_id.parse::<DocumentId>()?;
    let record = state.service.patch_record(record_id, changes).await?;

    Ok(Response::OK(DataResponse::new(
        record,
        "Record updated in the database",
    )))
}
