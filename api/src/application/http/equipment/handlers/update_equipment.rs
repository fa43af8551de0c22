use axum::extract::{Path, State};
use erudite_core::domain::{
    equipment::{entities::Equipment, ports::EquipmentService},
    query::DocumentId,
};

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

pub type UpdateEquipmentResponse = DataResponse<Equipment>;

pub async fn update_equipment(
    Path(equipment_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EquipmentValidator>,
) -> Result<Response<UpdateEquipmentResponse>, ApiError> {
    let equipment_id = equipment_id.parse::<DocumentId>()?;
    let equipment = state
        .service
        .replace_equipment(equipment_id, payload.into())
        .await?;

    Ok(Response::OK(DataResponse::new(
        equipment,
        "Equipment updated in the database",
    )))
}
