use axum::{Router, routing::get};

use super::handlers::{
    create_lesson::create_lesson, delete_lesson::delete_lesson, get_lesson::get_lesson,
    get_lessons::get_lessons, patch_lesson::patch_lesson, update_lesson::update_lesson,
};
use crate::application::http::server::app_state::AppState;

pub fn lesson_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/lessons", root_path),
            get(get_lessons).post(create_lesson),
        )
        .route(
            &format!("{}/lessons/{{lesson_id}}", root_path),
            get(get_lesson)
                .put(update_lesson)
                .patch(patch_lesson)
                .delete(delete_lesson),
        )
}
