use axum::extract::{Path, State};
use erudite_core::domain::{
    query::DocumentId,
    room::{entities::Room, ports::RoomService},
};

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type GetRoomResponse = DataResponse<Room>;

pub async fn get_room(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRoomResponse>, ApiError> {
    let room_id = room_id.parse::<DocumentId>()?;
    let room = state.service.get_room(room_id).await?;

    Ok(Response::OK(DataResponse::new(
        room,
        "Room loaded from the database",
    )))
}
