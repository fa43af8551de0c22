use serde_json::{Map, Value};

use crate::domain::{
    common::entities::app_errors::CoreError,
    lesson::{
        entities::{Lesson, LessonFields},
        value_objects::GetLessonsFilter,
    },
    query::DocumentId,
};

pub trait LessonService: Send + Sync {
    fn get_lessons(
        &self,
        filter: GetLessonsFilter,
    ) -> impl Future<Output = Result<Vec<Lesson>, CoreError>> + Send;

    fn get_lesson(
        &self,
        lesson_id: DocumentId,
    ) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn create_lesson(
        &self,
        fields: LessonFields,
    ) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn replace_lesson(
        &self,
        lesson_id: DocumentId,
        fields: LessonFields,
    ) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn patch_lesson(
        &self,
        lesson_id: DocumentId,
        changes: Map<String, Value>,
    ) -> impl Future<Output = Result<Lesson, CoreError>> + Send;

    fn delete_lesson(
        &self,
        lesson_id: DocumentId,
    ) -> impl Future<Output = Result<DocumentId, CoreError>> + Send;
}
