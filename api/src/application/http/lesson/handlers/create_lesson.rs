use axum::extract::State;
use erudite_core::domain::lesson::{entities::Lesson, ports::LessonService};
use tracing::info;

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

pub type CreateLessonResponse = DataResponse<Lesson>;

pub async fn create_lesson(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LessonValidator>,
) -> Result<Response<CreateLessonResponse>, ApiError> {
    let lesson = state.service.create_lesson(payload.into()).await?;
    info!(
        lesson_id = %lesson.id,
        ruz_lesson_oid = lesson.fields.ruz_lesson_oid,
        "lesson created"
    );

    Ok(Response::Created(DataResponse::new(
        lesson,
        "Lesson added to the database",
    )))
}
