use serde_json::{Map, Value};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    lesson::{
        entities::{Lesson, LessonFields},
        ports::LessonService,
        value_objects::{GetLessonsFilter, LESSON_SORTABLE_FIELDS},
    },
    query::{DocumentId, FilterValue, ListQuery, SortSpec, SuppliedArgs, TimeField},
    store::{ports::DocumentStore, services as store, value_objects::Collection},
};

pub const LESSON_TIME: TimeField = TimeField::Interval {
    start: "start_time",
    end: "end_time",
};

impl<S> LessonService for Service<S>
where
    S: DocumentStore,
{
    async fn get_lessons(&self, filter: GetLessonsFilter) -> Result<Vec<Lesson>, CoreError> {
        let args = SuppliedArgs::collect([
            ("course_code", filter.course_code.map(FilterValue::from)),
            ("ruz_auditorium", filter.ruz_auditorium.map(FilterValue::from)),
            ("ruz_lecturer_email", filter.ruz_lecturer_email.map(FilterValue::from)),
            ("ruz_lesson_oid", filter.ruz_lesson_oid.map(FilterValue::from)),
        ]);

        let query = ListQuery::new(filter.page)
            .matching(args)
            .within(&filter.dates, LESSON_TIME)
            .sorted_by(
                SortSpec::retain_sortable(filter.sort, LESSON_SORTABLE_FIELDS),
                vec![SortSpec::asc("start_time")],
            );

        store::list(&self.store, Collection::Lessons, query).await
    }

    async fn get_lesson(&self, lesson_id: DocumentId) -> Result<Lesson, CoreError> {
        store::load(&self.store, Collection::Lessons, lesson_id).await
    }

    async fn create_lesson(&self, fields: LessonFields) -> Result<Lesson, CoreError> {
        store::create(&self.store, Collection::Lessons, fields).await
    }

    async fn replace_lesson(&self, lesson_id: DocumentId, fields: LessonFields) -> Result<Lesson, CoreError> {
        store::replace(&self.store, Collection::Lessons, lesson_id, fields).await
    }

    async fn patch_lesson(&self, lesson_id: DocumentId, changes: Map<String, Value>) -> Result<Lesson, CoreError> {
        store::patch(&self.store, Collection::Lessons, lesson_id, changes).await
    }

    async fn delete_lesson(&self, lesson_id: DocumentId) -> Result<DocumentId, CoreError> {
        store::delete(&self.store, Collection::Lessons, lesson_id).await
    }
}
