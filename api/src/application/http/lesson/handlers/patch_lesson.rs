use axum::extract::{Path, State};
use erudite_core::domain::{
    lesson::{entities::Lesson, ports::LessonService},
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

pub type PatchLessonResponse = DataResponse<Lesson>;

pub async fn patch_lesson(
    Path(lesson_id): Path<String>,
    State(state): State<AppState>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Response<PatchLessonResponse>, ApiError> {
    let lesson_id = lesson_id.parse::<DocumentId>()?;
    let lesson = state.service.patch_lesson(lesson_id, changes).await?;

    Ok(Response::OK(DataResponse::new(
        lesson,
        "Lesson updated in the database",
    )))
}
