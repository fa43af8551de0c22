use axum::extract::{Path, State};
use erudite_core::domain::{equipment::ports::EquipmentService, query::DocumentId};
use tracing::info;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type DeleteEquipmentResponse = DataResponse<String>;

pub async fn delete_equipment(
    Path(equipment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteEquipmentResponse>, ApiError> {
    let equipment_id = equipment_id.parse::<DocumentId>()?;
    let deleted = state.service.delete_equipment(equipment_id).await?;
    info!(equipment_id = %deleted, "equipment deleted");

    Ok(Response::OK(DataResponse::new(
        deleted.to_hex(),
        "Equipment deleted from the database",
    )))
}
