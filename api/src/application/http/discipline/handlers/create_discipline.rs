use axum::extract::State;
use erudite_core::domain::discipline::{entities::Discipline, ports::DisciplineService};
use tracing::info;

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

pub type CreateDisciplineResponse = DataResponse<Discipline>;

pub async fn create_discipline(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DisciplineValidator>,
) -> Result<Response<CreateDisciplineResponse>, ApiError> {
    let discipline = state.service.create_discipline(payload.into()).await?;
    info!(
        discipline_id = %discipline.id,
        course_code = %discipline.fields.course_code,
        "discipline created"
    );

    Ok(Response::Created(DataResponse::new(
        discipline,
        "Discipline added to the database",
    )))
}
