use axum::extract::{Path, State};
use erudite_core::domain::{
    discipline::{entities::Discipline, ports::DisciplineService},
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

pub type PatchDisciplineResponse = DataResponse<Discipline>;

pub async fn patch_discipline(
    Path(discipline_id): Path<String>,
    State(state): State<AppState>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Response<PatchDisciplineResponse>, ApiError> {
    let discipline_id = discipline_id.parse::<DocumentId>()?;
    let discipline = state
        .service
        .patch_discipline(discipline_id, changes)
        .await?;

    Ok(Response::OK(DataResponse::new(
        discipline,
        "Discipline updated in the database",
    )))
}
