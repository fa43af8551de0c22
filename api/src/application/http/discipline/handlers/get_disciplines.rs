use axum::extract::State;
use erudite_core::domain::{
    discipline::{
        entities::Discipline, ports::DisciplineService, value_objects::GetDisciplinesFilter,
    },
    query::PageRequest,
};
use serde::{Deserialize, Serialize};

use crate::application::http::{
    query_extractor::QueryExtractor,
    query_params::parse_sort,
    server::{
        api_entities::{
            api_error::ApiError,
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct GetDisciplinesQuery {
    pub course_code: Option<String>,
    pub group: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
}

/// A `course_code` query names a single discipline; otherwise a page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DisciplinesData {
    One(Discipline),
    Many(Vec<Discipline>),
}

pub type GetDisciplinesResponse = DataResponse<DisciplinesData>;

pub async fn get_disciplines(
    QueryExtractor(query): QueryExtractor<GetDisciplinesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetDisciplinesResponse>, ApiError> {
    let course_code = query
        .course_code
        .filter(|course_code| !course_code.trim().is_empty());

    if let Some(course_code) = course_code {
        let discipline = state
            .service
            .get_discipline_by_course_code(course_code)
            .await?;

        return Ok(Response::OK(DataResponse::new(
            DisciplinesData::One(discipline),
            "Discipline loaded from the database",
        )));
    }

    let disciplines = state
        .service
        .get_disciplines(GetDisciplinesFilter {
            group: query.group,
            page: PageRequest::new(query.page_number, query.page_size),
            sort: parse_sort(query.sort.as_deref()),
        })
        .await?;

    Ok(Response::OK(DataResponse::new(
        DisciplinesData::Many(disciplines),
        "Disciplines loaded from the database",
    )))
}
