use axum::extract::{Path, State};
use erudite_core::domain::{
    query::DocumentId,
    record::{entities::Record, ports::RecordService},
};

use crate::application::http::{
    record::validators::RecordValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

pub type UpdateRecordResponse = DataResponse<Record>;

pub async fn update_record(
    Path(record_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordValidator>,
) -> Result<Response<UpdateRecordResponse>, ApiError> {
    let record_id = record_id.parse::<DocumentId>()?;
    let record = state.service.replace_record(record_id, payload.into()).await?;

    Ok(Response::OK(DataResponse::new(
        record,
        "Record updated in the database",
    )))
}
