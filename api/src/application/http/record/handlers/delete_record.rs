use axum::extract::{Path, State};
use erudite_core::domain::{query::DocumentId, record::ports::RecordService};
use tracing::info;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type DeleteRecordResponse = DataResponse<String>;

pub async fn delete_record(
    Path(record_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRecordResponse>, ApiError> {
    let record_id = record_id.parse::<DocumentId>()?;
    let deleted = state.service.delete_record(record_id).await?;
    info!(record_id = %deleted, "record deleted");

    Ok(Response::OK(DataResponse::new(
        deleted.to_hex(),
        "Record deleted from the database",
    )))
}
