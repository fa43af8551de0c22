use axum::{Router, routing::get};

use super::handlers::{
    create_record::create_record, delete_record::delete_record, get_record::get_record,
    get_records::get_records, patch_record::patch_record, update_record::update_record,
};
use crate::application::http::server::app_state::AppState;

pub fn record_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/records", root_path),
            get(get_records).post(create_record),
        )
        .route(
            &format!("{}/records/{{record_id}}", root_path),
            get(get_record)
                .put(update_record)
                .patch(patch_record)
                .delete(delete_record),
        )
}
