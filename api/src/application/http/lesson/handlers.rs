pub mod create_lesson;
pub mod delete_lesson;
pub mod get_lesson;
pub mod get_lessons;
pub mod patch_lesson;
pub mod update_lesson;
