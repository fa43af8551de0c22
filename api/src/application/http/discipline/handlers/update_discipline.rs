use axum::extract::{Path, State};
use erudite_core::domain::{
    discipline::{entities::Discipline, ports::DisciplineService},
    query::DocumentId,
};

use crate::application::http::{
    discipline::validators::DisciplineValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

pub type UpdateDisciplineResponse = DataResponse<Discipline>;

pub async fn update_discipline(
    Path(discipline_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DisciplineValidator>,
) -> Result<Response<UpdateDisciplineResponse>, ApiError> {
    let discipline_id = discipline_id.parse::<DocumentId>()?;
    let discipline = state
        .service
        .replace_discipline(discipline_id, payload.into())
        .await?;

    Ok(Response::OK(DataResponse::new(
        discipline,
        "Discipline updated in the database",
    )))
}
