use axum::extract::State;
use erudite_core::domain::{
    equipment::{
        entities::Equipment, ports::EquipmentService, value_objects::GetEquipmentFilter,
    },
    query::PageRequest,
};
use serde::Deserialize;

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
pub struct GetEquipmentListQuery {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub room_id: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
}

pub type GetEquipmentListResponse = DataResponse<Vec<Equipment>>;

pub async fn get_equipment_list(
    QueryExtractor(query): QueryExtractor<GetEquipmentListQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetEquipmentListResponse>, ApiError> {
    let equipment = state
        .service
        .get_equipment_list(GetEquipmentFilter {
            name: query.name,
            kind: query.kind,
            room_id: query.room_id,
            page: PageRequest::new(query.page_number, query.page_size),
            sort: parse_sort(query.sort.as_deref()),
        })
        .await?;

    Ok(Response::OK(DataResponse::new(
        equipment,
        "Equipment loaded from the database",
    )))
}
