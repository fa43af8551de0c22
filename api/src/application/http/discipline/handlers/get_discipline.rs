use axum::extract::{Path, State};
use erudite_core::domain::{
    discipline::{entities::Discipline, ports::DisciplineService},
    query::DocumentId,
};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type GetDisciplineResponse = DataResponse<Discipline>;

pub async fn get_discipline(
    Path(discipline_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetDisciplineResponse>, ApiError> {
    let discipline_id = discipline_id.parse::<DocumentId>()?;
    let discipline = state.service.get_discipline(discipline_id).await?;

    Ok(Response::OK(DataResponse::new(
        discipline,
        "Discipline loaded from the database",
    )))
}
