pub mod create_record;
pub mod delete_record;
pub mod get_record;
pub mod get_records;
pub mod patch_record;
pub mod update_record;
