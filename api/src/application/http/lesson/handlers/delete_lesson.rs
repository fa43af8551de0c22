use axum::extract::{Path, State};
use erudite_core::domain::{lesson::ports::LessonService, query::DocumentId};
use tracing::info;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type DeleteLessonResponse = DataResponse<String>;

pub async fn delete_lesson(
    Path(lesson_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteLessonResponse>, ApiError> {
    let lesson_id = lesson_id.parse::<DocumentId>()?;
    let deleted = state.service.delete_lesson(lesson_id).await?;
    info!(lesson_id = %deleted, "lesson deleted");

    Ok(Response::OK(DataResponse::new(
        deleted.to_hex(),
        "Lesson deleted from the database",
    )))
}
