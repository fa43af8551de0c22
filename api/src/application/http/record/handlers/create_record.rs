use axum::extract::State;
use erudite_core::domain::record::{entities::Record, ports::RecordService};
use tracing::info;

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

pub type CreateRecordResponse = DataResponse<Record>;

pub async fn create_record(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecordValidator>,
) -> Result<Response<CreateRecordResponse>, ApiError> {
    let record = state.service.create_record(payload.into()).await?;
    info!(record_id = %record.id, room_name = %record.fields.room_name, "record created");

    Ok(Response::Created(DataResponse::new(
        record,
        "Record added to the database",
    )))
}
