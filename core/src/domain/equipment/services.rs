use serde_json::{Map, Value};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    equipment::{
        entities::{Equipment, EquipmentFields, LEGACY_ROOM_LINK},
        ports::EquipmentService,
        value_objects::{EQUIPMENT_SORTABLE_FIELDS, GetEquipmentFilter},
    },
    query::{DocumentId, Filter, FilterValue, ListQuery, SortSpec, SuppliedArgs},
    store::{ports::DocumentStore, services as store, value_objects::Collection},
};

/// Equipment linked to any of `keys`, through `room_id` or the legacy
/// `additional.room_id`.
pub fn room_link_filter<'a>(keys: impl IntoIterator<Item = &'a str>) -> Filter {
    let keys: Vec<&str> = keys.into_iter().collect();

    Filter::or([
        Filter::one_of("room_id", keys.iter().copied()),
        Filter::one_of(format!("additional.{LEGACY_ROOM_LINK}"), keys.iter().copied()),
    ])
}

impl<S> EquipmentService for Service<S>
where
    S: DocumentStore,
{
    async fn get_equipment_list(&self, filter: GetEquipmentFilter) -> Result<Vec<Equipment>, CoreError> {
        let args = SuppliedArgs::collect([
            ("name", filter.name.map(FilterValue::from)),
            ("type", filter.kind.map(FilterValue::from)),
        ]);

        let mut query = ListQuery::new(filter.page).matching(args).sorted_by(
            SortSpec::retain_sortable(filter.sort, EQUIPMENT_SORTABLE_FIELDS),
            Vec::new(),
        );
        if let Some(room_id) = filter.room_id.filter(|room_id| !room_id.trim().is_empty()) {
            query = query.filtered(room_link_filter([room_id.as_str()]));
        }

        store::list(&self.store, Collection::Equipment, query).await
    }

    async fn get_equipment(&self, equipment_id: DocumentId) -> Result<Equipment, CoreError> {
        store::load(&self.store, Collection::Equipment, equipment_id).await
    }

    async fn create_equipment(&self, fields: EquipmentFields) -> Result<Equipment, CoreError> {
        store::create(&self.store, Collection::Equipment, fields.promote_room_link()).await
    }

    async fn replace_equipment(
        &self,
        equipment_id: DocumentId,
        fields: EquipmentFields,
    ) -> Result<Equipment, CoreError> {
        store::replace(
            &self.store,
            Collection::Equipment,
            equipment_id,
            fields.promote_room_link(),
        )
        .await
    }

    async fn patch_equipment(
        &self,
        equipment_id: DocumentId,
        changes: Map<String, Value>,
    ) -> Result<Equipment, CoreError> {
        store::patch(&self.store, Collection::Equipment, equipment_id, changes).await
    }

    async fn delete_equipment(&self, equipment_id: DocumentId) -> Result<DocumentId, CoreError> {
        store::delete(&self.store, Collection::Equipment, equipment_id).await
    }
}
