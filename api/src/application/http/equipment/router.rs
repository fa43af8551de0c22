use axum::{Router, routing::get};

use super::handlers::{
    create_equipment::create_equipment, delete_equipment::delete_equipment,
    get_equipment::get_equipment, get_equipment_list::get_equipment_list,
    patch_equipment::patch_equipment, update_equipment::update_equipment,
};
use crate::application::http::server::app_state::AppState;

pub fn equipment_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/equipment", root_path),
            get(get_equipment_list).post(create_equipment),
        )
        .route(
            &format!("{}/equipment/{{equipment_id}}", root_path),
            get(get_equipment)
                .put(update_equipment)
                .patch(patch_equipment)
                .delete(delete_equipment),
        )
}
