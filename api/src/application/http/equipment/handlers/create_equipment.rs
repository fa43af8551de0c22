use axum::extract::State;
use erudite_core::domain::equipment::{entities::Equipment, ports::EquipmentService};
use tracing::info;

use crate::application::http::{
    equipment::validators::EquipmentValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

pub type CreateEquipmentResponse = DataResponse<Equipment>;

pub async fn create_equipment(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EquipmentValidator>,
) -> Result<Response<CreateEquipmentResponse>, ApiError> {
    let equipment = state.service.create_equipment(payload.into()).await?;
    info!(equipment_id = %equipment.id, name = %equipment.fields.name, "equipment created");

    Ok(Response::Created(DataResponse::new(
        equipment,
        "Equipment added to the database",
    )))
}
