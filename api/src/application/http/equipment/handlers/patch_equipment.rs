use axum::extract::{Path, State};
use erudite_core::domain::{
    equipment::{entities::Equipment, ports::EquipmentService},
    query::DocumentId,
};
use serde_json::{Map, Value};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonBody},
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type PatchEquipmentResponse = DataResponse<Equipment>;

pub async fn patch_equipment(
    Path(equipment_id): Path<String>,
    State(state): State<AppState>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Response<PatchEquipmentResponse>, ApiError> {
    let equipment_id = equipment_id.parse::<DocumentId>()?;
    let equipment = state.service.patch_equipment(equipment_id, changes).await?;

    Ok(Response::OK(DataResponse::new(
        equipment,
        "Equipment updated in the database",
    )))
}
