pub mod create_room;
pub mod delete_room;
pub mod get_room;
pub mod get_room_equipment;
pub mod get_rooms;
pub mod patch_room;
pub mod update_room;
