use axum::extract::{Path, State};
use erudite_core::domain::{
    query::DocumentId,
    room::{entities::Room, ports::RoomService},
};

use crate::application::http::{
    room::validators::RoomValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::{DataResponse, Response},
        },
        app_state::AppState,
    },
};

pub type UpdateRoomResponse = DataResponse<Room>;

pub async fn update_room(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RoomValidator>,
) -> Result<Response<UpdateRoomResponse>, ApiError> {
    let room_id = room_id.parse::<DocumentId>()?;
    let room = state.service.replace_room(room_id, payload.into()).await?;

    Ok(Response::OK(DataResponse::new(
        room,
        "Room updated in the database",
    )))
}
