use axum::{Router, routing::get};

use super::handlers::{
    create_room::create_room, delete_room::delete_room, get_room::get_room,
    get_room_equipment::get_room_equipment, get_rooms::get_rooms, patch_room::patch_room,
    update_room::update_room,
};
use crate::application::http::server::app_state::AppState;

pub fn room_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/rooms", root_path),
            get(get_rooms).post(create_room),
        )
        .route(
            &format!("{}/rooms/{{room_id}}", root_path),
            get(get_room)
                .put(update_room)
                .patch(patch_room)
                .delete(delete_room),
        )
        .route(
            &format!("{}/rooms/{{room_id}}/equipment", root_path),
            get(get_room_equipment),
        )
}
