use axum::extract::{Path, State};
use erudite_core::domain::{
    equipment::{entities::Equipment, ports::EquipmentService},
    query::DocumentId,
};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type GetEquipmentResponse = DataResponse<Equipment>;

pub async fn get_equipment(
    Path(equipment_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetEquipmentResponse>, ApiError> {
    let equipment_id = equipment_id.parse::<DocumentId>()?;
    let equipment = state.service.get_equipment(equipment_id).await?;

    Ok(Response::OK(DataResponse::new(
        equipment,
        "Equipment loaded from the database",
    )))
}
