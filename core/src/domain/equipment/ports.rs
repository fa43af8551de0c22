use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    equipment::{
        entities::{Equipment, EquipmentFields},
        value_objects::GetEquipmentFilter,
    },
    query::DocumentId,
};

pub trait EquipmentService: Send + Sync {
    fn get_equipment_list(
        &self,
        filter: GetEquipmentFilter,
    ) -> impl Future<Output = Result<Vec<Equipment>, CoreError>> + Send;

    fn get_equipment(
        &self,
        equipment_id: DocumentId,
    ) -> impl Future<Output = Result<Equipment, CoreError>> + Send;

    fn create_equipment(
        &self,
        fields: EquipmentFields,
    ) -> impl Future<Output = Result<Equipment, CoreError>> + Send;

    fn replace_equipment(
        &self,
        equipment_id: DocumentId,
        fields: EquipmentFields,
    ) -> impl Future<Output = Result<Equipment, CoreError>> + Send;

    fn patch_equipment(
        &self,
        equipment_id: DocumentId,
        changes: Map<String, Value>,
    ) -> impl Future<Output = Result<Equipment, CoreError>> + Send;

    fn delete_equipment(
        &self,
        equipment_id: DocumentId,
    ) -> impl Future<Output = Result<DocumentId, CoreError>> + Send;
}
