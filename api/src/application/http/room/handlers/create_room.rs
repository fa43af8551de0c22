use axum::extract::State;
use erudite_core::domain::room::{entities::Room, ports::RoomService};
use tracing::info;

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

pub type CreateRoomResponse = DataResponse<Room>;

pub async fn create_room(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RoomValidator>,
) -> Result<Response<CreateRoomResponse>, ApiError> {
    let room = state.service.create_room(payload.into()).await?;
    info!(room_id = %room.id, name = %room.fields.name, "room created");

    Ok(Response::Created(DataResponse::new(
        room,
        "Room added to the database",
    )))
}
