use serde_json::{Map, Value};
use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    discipline::{
        entities::{Discipline, DisciplineFields},
        ports::DisciplineService,
        value_objects::{DISCIPLINE_SORTABLE_FIELDS, GetDisciplinesFilter},
    },
    query::{DocumentId, Filter, FilterValue, ListQuery, SortSpec, SuppliedArgs},
    store::{ports::DocumentStore, services as store, value_objects::Collection},
};

impl<S> DisciplineService for Service<S>
where
    S: DocumentStore,
{
    async fn get_disciplines(&self, filter: GetDisciplinesFilter) -> Result<Vec<Discipline>, CoreError> {
        let args = SuppliedArgs::collect([("groups", filter.group.map(FilterValue::from))]);
        let query = ListQuery::new(filter.page).matching(args).sorted_by(
            SortSpec::retain_sortable(filter.sort, DISCIPLINE_SORTABLE_FIELDS),
            Vec::new(),
        );

        store::list(&self.store, Collection::Disciplines, query).await
    }

    async fn get_discipline_by_course_code(&self, course_code: String) -> Result<Discipline, CoreError> {
        let document = self
            .store
            .find_one(
                Collection::Disciplines,
                Filter::eq("course_code", course_code.as_str()),
            )
            .await?;

        match document {
            Some(document) => Discipline::from_document(document),
            None => {
                info!(%course_code, "discipline not found");
                Err(CoreError::NotFound("This discipline is not found".to_string()))
            }
        }
    }

    async fn get_discipline(&self, discipline_id: DocumentId) -> Result<Discipline, CoreError> {
        store::load(&self.store, Collection::Disciplines, discipline_id).await
    }

    async fn create_discipline(&self, fields: DisciplineFields) -> Result<Discipline, CoreError> {
        store::create(&self.store, Collection::Disciplines, fields).await
    }

    async fn replace_discipline(
        &self,
        discipline_id: DocumentId,
        fields: DisciplineFields,
    ) -> Result<Discipline, CoreError> {
        store::replace(&self.store, Collection::Disciplines, discipline_id, fields).await
    }

    async fn patch_discipline(
        &self,
        discipline_id: DocumentId,
        changes: Map<String, Value>,
    ) -> Result<Discipline, CoreError> {
        store::patch(&self.store, Collection::Disciplines, discipline_id, changes).await
    }

    async fn delete_discipline(&self, discipline_id: DocumentId) -> Result<DocumentId, CoreError> {
        store::delete(&self.store, Collection::Disciplines, discipline_id).await
    }
}
