use axum::{Router, routing::get};

use super::handlers::{
    create_discipline::create_discipline, delete_discipline::delete_discipline,
    get_discipline::get_discipline, get_disciplines::get_disciplines,
    patch_discipline::patch_discipline, update_discipline::update_discipline,
};
use crate::application::http::server::app_state::AppState;

pub fn discipline_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/disciplines", root_path),
            get(get_disciplines).post(create_discipline),
        )
        .route(
            &format!("{}/disciplines/{{discipline_id}}", root_path),
            get(get_discipline)
                .put(update_discipline)
                .patch(patch_discipline)
                .delete(delete_discipline),
        )
}
