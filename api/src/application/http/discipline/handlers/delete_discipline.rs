use axum::extract::{Path, State};
use erudite_core::domain::{discipline::ports::DisciplineService, query::DocumentId};
use tracing::info;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type DeleteDisciplineResponse = DataResponse<String>;

pub async fn delete_discipline(
    Path(discipline_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteDisciplineResponse>, ApiError> {
    let discipline_id = discipline_id.parse::<DocumentId>()?;
    let deleted = state.service.delete_discipline(discipline_id).await?;
    info!(discipline_id = %deleted, "discipline deleted");

    Ok(Response::OK(DataResponse::new(
        deleted.to_hex(),
        "Discipline deleted from the database",
    )))
}
