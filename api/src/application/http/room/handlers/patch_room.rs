use axum::extract::{Path, State};
use erudite_core::domain::{
    query::DocumentId,
    room::{entities::Room, ports::RoomService},
};
use serde_json::{Map, Value};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonBody},
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type PatchRoomResponse = DataResponse<Room>;

pub async fn patch_room(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Response<PatchRoomResponse>, ApiError> {
    let room_id = room_id.parse::<DocumentId>()?;
    let room = state.service.patch_room(room_id, changes).await?;

    Ok(Response::OK(DataResponse::new(
        room,
        "Room updated in the database",
    )))
}
