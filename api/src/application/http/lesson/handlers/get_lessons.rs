use axum::extract::State;
use erudite_core::domain::{
    lesson::{entities::Lesson, ports::LessonService, value_objects::GetLessonsFilter},
    query::PageRequest,
};
use serde::Deserialize;

use crate::application::http::{
    query_extractor::QueryExtractor,
    query_params::{date_range, parse_sort},
    server::{
        api_entities::{
            api_error::ApiError,
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct GetLessonsQuery {
    pub course_code: Option<String>,
    pub ruz_auditorium: Option<String>,
    pub ruz_lecturer_email: Option<String>,
    pub ruz_lesson_oid: Option<i64>,
    pub fromdate: Option<String>,
    pub todate: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
}

pub type GetLessonsResponse = DataResponse<Vec<Lesson>>;

pub async fn get_lessons(
    QueryExtractor(query): QueryExtractor<GetLessonsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetLessonsResponse>, ApiError> {
    let dates = date_range(query.fromdate.as_deref(), query.todate.as_deref())?;

    let lessons = state
        .service
        .get_lessons(GetLessonsFilter {
            course_code: query.course_code,
            ruz_auditorium: query.ruz_auditorium,
            ruz_lecturer_email: query.ruz_lecturer_email,
            ruz_lesson_oid: query.ruz_lesson_oid,
            dates,
            page: PageRequest::new(query.page_number, query.page_size),
            sort: parse_sort(query.sort.as_deref()),
        })
        .await?;

    Ok(Response::OK(DataResponse::new(
        lessons,
        "Lessons loaded from the database",
    )))
}
