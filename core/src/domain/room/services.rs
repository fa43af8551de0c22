use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    equipment::{entities::Equipment, services::room_link_filter},
    query::{DocumentId, Filter, FilterValue, ListQuery, SortSpec, SuppliedArgs},
    room::{
        entities::{Room, RoomFields},
        ports::RoomService,
        value_objects::{GetRoomEquipmentInput, GetRoomsFilter, ROOM_SORTABLE_FIELDS},
    },
    store::{ports::DocumentStore, services as store, value_objects::Collection},
};

impl<S> RoomService for Service<S>
where
    S: DocumentStore,
{
    async fn get_rooms(&self, filter: GetRoomsFilter) -> Result<Vec<Room>, CoreError> {
        let args = SuppliedArgs::collect([("name", filter.name.map(FilterValue::from))]);
        let query = ListQuery::new(filter.page)
            .matching(args)
            .sorted_by(SortSpec::retain_sortable(filter.sort, ROOM_SORTABLE_FIELDS), Vec::new());

        store::list(&self.store, Collection::Rooms, query).await
    }

    async fn get_room(&self, room_id: DocumentId) -> Result<Room, CoreError> {
        store::load(&self.store, Collection::Rooms, room_id).await
    }

    async fn create_room(&self, fields: RoomFields) -> Result<Room, CoreError> {
        store::create(&self.store, Collection::Rooms, fields).await
    }

    async fn replace_room(&self, room_id: DocumentId, fields: RoomFields) -> Result<Room, CoreError> {
        store::replace(&self.store, Collection::Rooms, room_id, fields).await
    }

    async fn patch_room(&self, room_id: DocumentId, changes: Map<String, Value>) -> Result<Room, CoreError> {
        store::patch(&self.store, Collection::Rooms, room_id, changes).await
    }

    async fn delete_room(&self, room_id: DocumentId) -> Result<DocumentId, CoreError> {
        store::delete(&self.store, Collection::Rooms, room_id).await
    }

    async fn get_room_equipment(&self, input: GetRoomEquipmentInput) -> Result<Vec<Equipment>, CoreError> {
        let by_key = match DocumentId::parse(&input.room) {
            Some(id) => Filter::or([Filter::id(id), Filter::eq("name", input.room.as_str())]),
            None => Filter::eq("name", input.room.as_str()),
        };

        let room: Room = match self.store.find_one(Collection::Rooms, by_key).await? {
            Some(document) => Room::from_document(document)?,
            None => {
                info!(room = %input.room, "room not found");
                return Err(CoreError::NotFound("This room is not found".to_string()));
            }
        };

        let query = ListQuery::new(input.page).filtered(room_link_filter([
            room.id.as_str(),
            room.fields.name.as_str(),
        ]));

        store::list(&self.store, Collection::Equipment, query).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::{
        domain::{
            equipment::{entities::EquipmentFields, ports::EquipmentService},
            query::PageRequest,
            store::ports::MockDocumentStore,
        },
        infrastructure::db::memory::InMemoryDocumentStore,
    };

    fn service() -> Service<InMemoryDocumentStore> {
        Service::new(InMemoryDocumentStore::new())
    }

    fn room(name: &str) -> RoomFields {
        RoomFields {
            name: name.to_string(),
            additional: BTreeMap::from([("drive".to_string(), "url1".to_string())]),
        }
    }

    fn camera(name: &str, additional: &[(&str, &str)], room_id: Option<&str>) -> EquipmentFields {
        EquipmentFields {
            name: name.to_string(),
            kind: "ONVIF".to_string(),
            room_id: room_id.map(str::to_string),
            additional: additional
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[tokio::test]
    async fn second_room_with_same_name_conflicts() {
        let service = service();
        let created = service.create_room(room("504")).await.unwrap();
        assert!(DocumentId::parse(&created.id).is_some());

        let err = service.create_room(room("504")).await.unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));

        let rooms = service.get_rooms(GetRoomsFilter::default()).await.unwrap();
        assert_eq!(rooms, vec![created]);
    }

    #[tokio::test]
    async fn filters_rooms_by_name() {
        let service = service();
        service.create_room(room("504")).await.unwrap();
        service.create_room(room("505")).await.unwrap();

        let rooms = service
            .get_rooms(GetRoomsFilter {
                name: Some("505".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].fields.name, "505");

        let rooms = service
            .get_rooms(GetRoomsFilter {
                name: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(rooms.len(), 2);
    }

    #[tokio::test]
    async fn room_equipment_matches_by_name_or_id() {
        let service = service();
        let created = service.create_room(room("504")).await.unwrap();

        service.create_equipment(camera("Cam1", &[("room_id", "504")], None)).await.unwrap();
        service.create_equipment(camera("Cam2", &[], Some(&created.id))).await.unwrap();
        service.create_equipment(camera("Cam3", &[("room_id", "505")], None)).await.unwrap();

        for key in [created.id.clone(), "504".to_string()] {
            let equipment = service
                .get_room_equipment(GetRoomEquipmentInput {
                    room: key,
                    page: PageRequest::default(),
                })
                .await
                .unwrap();
            let names: Vec<&str> = equipment.iter().map(|e| e.fields.name.as_str()).collect();
            assert_eq!(names, vec!["Cam1", "Cam2"]);
        }
    }

    #[tokio::test]
    async fn room_equipment_for_unknown_room_is_not_found() {
        let err = service()
            .get_room_equipment(GetRoomEquipmentInput {
                room: "404".to_string(),
                page: PageRequest::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound("This room is not found".to_string()));
    }

    #[tokio::test]
    async fn patch_keeps_unrelated_fields() {
        let service = service();
        let created = service.create_room(room("504")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();

        let Value::Object(changes) = json!({ "name": "504a" }) else { unreachable!() };
        let patched = service.patch_room(id, changes).await.unwrap();

        assert_eq!(patched.fields.name, "504a");
        assert_eq!(patched.fields.additional, room("504").additional);
    }

    #[tokio::test]
    async fn unknown_fields_are_rejected_on_patch() {
        let service = service();
        let created = service.create_room(room("504")).await.unwrap();
        let id = DocumentId::parse(&created.id).unwrap();

        let Value::Object(changes) = json!({ "floor": 5 }) else { unreachable!() };
        let err = service.patch_room(id, changes).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find()
            .times(1)
            .returning(|_, _| Box::pin(async { Err(CoreError::Store("timed out".into())) }));
        store
            .expect_find_one()
            .times(1)
            .returning(|_, _| Box::pin(async { Err(CoreError::Store("timed out".into())) }));
        store.expect_insert_one().never();
        let service = Service::new(store);

        let err = service.get_rooms(GetRoomsFilter::default()).await.unwrap_err();
        assert!(err.is_infrastructure());

        let err = service.create_room(room("504")).await.unwrap_err();
        assert!(err.is_infrastructure());
    }
}
