use axum::extract::{Path, State};
use erudite_core::domain::{
    equipment::entities::Equipment,
    query::PageRequest,
    room::{ports::RoomService, value_objects::GetRoomEquipmentInput},
};
use serde::Deserialize;

use crate::application::http::{
    query_extractor::QueryExtractor,
    server::{
        api_entities::{
            api_error::ApiError,
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct GetRoomEquipmentQuery {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

pub type GetRoomEquipmentResponse = DataResponse<Vec<Equipment>>;

/// `room_id` may be the room's identifier or its name.
pub async fn get_room_equipment(
    Path(room_id): Path<String>,
    QueryExtractor(query): QueryExtractor<GetRoomEquipmentQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetRoomEquipmentResponse>, ApiError> {
    let equipment = state
        .service
        .get_room_equipment(GetRoomEquipmentInput {
            room: room_id,
            page: PageRequest::new(query.page_number, query.page_size),
        })
        .await?;

    Ok(Response::OK(DataResponse::new(
        equipment,
        "Equipment of the room loaded from the database",
    )))
}
