use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    discipline::{
        entities::{Discipline, DisciplineFields},
        value_objects::GetDisciplinesFilter,
    },
    query::DocumentId,
};

pub trait DisciplineService: Send + Sync {
    fn get_disciplines(
        &self,
        filter: GetDisciplinesFilter,
    ) -> impl Future<Output = Result<Vec<Discipline>, CoreError>> + Send;

    /// Secondary-key lookup; absence is a not-found error.
    fn get_discipline_by_course_code(
        &self,
        course_code: String,
    ) -> impl Future<Output = Result<Discipline, CoreError>> + Send;

    fn get_discipline(
        &self,
        discipline_id: DocumentId,
    ) -> impl Future<Output = Result<Discipline, CoreError>> + Send;

    fn create_discipline(
        &self,
        fields: DisciplineFields,
    ) -> impl Future<Output = Result<Discipline, CoreError>> + Send;

    fn replace_discipline(
        &self,
        discipline_id: DocumentId,
        fields: DisciplineFields,
    ) -> impl Future<Output = Result<Discipline, CoreError>> + Send;

    fn patch_discipline(
        &self,
        discipline_id: DocumentId,
        changes: Map<String, Value>,
    ) -> impl Future<Output = Result<Discipline, CoreError>> + Send;

    fn delete_discipline(
        &self,
        discipline_id: DocumentId,
    ) -> impl Future<Output = Result<DocumentId, CoreError>> + Send;
}
