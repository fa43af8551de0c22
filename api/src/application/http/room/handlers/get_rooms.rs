use axum::extract::State;
use erudite_core::domain::{
    query::PageRequest,
    room::{entities::Room, ports::RoomService, value_objects::GetRoomsFilter},
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
pub struct GetRoomsQuery {
    pub name: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
}

pub type GetRoomsResponse = DataResponse<Vec<Room>>;

pub async fn get_rooms(
    QueryExtractor(query): QueryExtractor<GetRoomsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetRoomsResponse>, ApiError> {
    let rooms = state
        .service
        .get_rooms(GetRoomsFilter {
            name: query.name,
            page: PageRequest::new(query.page_number, query.page_size),
            sort: parse_sort(query.sort.as_deref()),
        })
        .await?;

    Ok(Response::OK(DataResponse::new(
        rooms,
        "Rooms loaded from the database",
    )))
}
