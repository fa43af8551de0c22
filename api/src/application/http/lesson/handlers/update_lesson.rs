use axum::extract::{Path, State};
use erudite_core::domain::{
    lesson::{entities::Lesson, ports::LessonService},
    query::DocumentId,
};

use crate::application::http::{
    lesson::validators::LessonValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

pub type UpdateLessonResponse = DataResponse<Lesson>;

pub async fn update_lesson(
    Path(lesson_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LessonValidator>,
) -> Result<Response<UpdateLessonResponse>, ApiError> {
    let lesson_id = lesson_id.parse::<DocumentId>()?;
    let lesson = state.service.replace_lesson(lesson_id, payload.into()).await?;

    Ok(Response::OK(DataResponse::new(
        lesson,
        "Lesson updated in the database",
    )))
}
