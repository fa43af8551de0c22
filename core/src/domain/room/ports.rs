use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    equipment::entities::Equipment,
    query::DocumentId,
    room::{
        entities::{Room, RoomFields},
        value_objects::{GetRoomEquipmentInput, GetRoomsFilter},
    },
};

pub trait RoomService: Send + Sync {
    fn get_rooms(
        &self,
        filter: GetRoomsFilter,
    ) -> impl Future<Output = Result<Vec<Room>, CoreError>> + Send;

    fn get_room(&self, room_id: DocumentId) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn create_room(
        &self,
        fields: RoomFields,
    ) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn replace_room(
        &self,
        room_id: DocumentId,
        fields: RoomFields,
    ) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn patch_room(
        &self,
        room_id: DocumentId,
        changes: Map<String, Value>,
    ) -> impl Future<Output = Result<Room, CoreError>> + Send;

    fn delete_room(
        &self,
        room_id: DocumentId,
    ) -> impl Future<Output = Result<DocumentId, CoreError>> + Send;

    fn get_room_equipment(
        &self,
        input: GetRoomEquipmentInput,
    ) -> impl Future<Output = Result<Vec<Equipment>, CoreError>> + Send;
}
