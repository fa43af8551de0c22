use axum::extract::{Path, State};
use erudite_core::domain::{query::DocumentId, room::ports::RoomService};
use tracing::info;

use crate::application::http::server::{
    api_entities::{
        api_error::ApiError,
        response::{DataResponse, Response},
    },
    app_state::AppState,
};

pub type DeleteRoomResponse = DataResponse<String>;

pub async fn delete_room(
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteRoomResponse>, ApiError> {
    let room_id = room_id.parse::<DocumentId>()?;
    let deleted = state.service.delete_room(room_id).await?;
    info!(room_id = %deleted, "room deleted");

    Ok(Response::OK(DataResponse::new(
        deleted.to_hex(),
        "Room deleted from the database",
    )))
}
