use axum::extract::{Path, State};
use erudite_core::domain::{
    lesson::{entities::Lesson, ports::LessonService},
    query::DocumentId,
};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type GetLessonResponse = DataResponse<Lesson>;

pub async fn get_lesson(
    Path(lesson_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetLessonResponse>, ApiError> {
    let lesson_id = lesson_id.parse::<DocumentId>()?;
    let lesson = state.service.get_lesson(lesson_id).await?;

    Ok(Response::OK(DataResponse::new(
        lesson,
        "Lesson loaded from the database",
    )))
}
