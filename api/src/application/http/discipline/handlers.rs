pub mod create_discipline;
pub mod delete_discipline;
pub mod get_discipline;
pub mod get_disciplines;
pub mod patch_discipline;
pub mod update_discipline;
