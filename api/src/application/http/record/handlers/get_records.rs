use axum::extract::State;
use erudite_core::domain::{
    query::PageRequest,
    record::{
        entities::{Record, RecordKind},
        ports::RecordService,
        value_objects::GetRecordsFilter,
    },
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
pub struct GetRecordsQuery {
    pub room_name: Option<String>,
    pub url: Option<String>,
    pub camera_ip: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub fromdate: Option<String>,
    pub todate: Option<String>,
    pub ignore_autorec: Option<bool>,
    pub with_keywords_only: Option<bool>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
}

pub type GetRecordsResponse = DataResponse<Vec<Record>>;

fn parse_kind(raw: Option<&str>) -> Result<Option<RecordKind>, ApiError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => RecordKind::parse(raw)
            .map(Some)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown record type: '{}'", raw))),
        None => Ok(None),
    }
}

pub async fn get_records(
    QueryExtractor(query): QueryExtractor<GetRecordsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetRecordsResponse>, ApiError> {
    let dates = date_range(query.fromdate.as_deref(), query.todate.as_deref())?;
    let kind = parse_kind(query.kind.as_deref())?;

    let records = state
        .service
        .get_records(GetRecordsFilter {
            room_name: query.room_name,
            url: query.url,
            camera_ip: query.camera_ip,
            kind,
            dates,
            ignore_autorec: query.ignore_autorec.unwrap_or(false),
            with_keywords_only: query.with_keywords_only.unwrap_or(false),
            page: PageRequest::new(query.page_number, query.page_size),
            sort: parse_sort(query.sort.as_deref()),
        })
        .await?;

    Ok(Response::OK(DataResponse::new(
        records,
        "Records loaded from the database",
    )))
}
