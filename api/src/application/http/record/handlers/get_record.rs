use axum::extract::{Path, State};
use erudite_core::domain::{
    query::DocumentId,
    record::{entities::Record, ports::RecordService},
};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type GetRecordResponse = DataResponse<Record>;

pub async fn get_record(
    Path(record_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecordResponse>, ApiError> {
    let record_id = record_id.parse::<DocumentId>()?;
    let record = state.service.get_record(record_id).await?;

    Ok(Response::OK(DataResponse::new(
        record,
        "Record loaded from the database",
    )))
}
