pub mod create_equipment;
pub mod delete_equipment;
pub mod get_equipment;
pub mod get_equipment_list;
pub mod patch_equipment;
pub mod update_equipment;
