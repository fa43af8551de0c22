use bson::{Document, doc};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        lesson::entities::LessonFields,
        query::FilterValue,
        store::entities::DocumentFields,
    },
    infrastructure::documents::{
        FieldReader, ensure_filled, ensure_ordered, insert_extra, insert_opt, timestamp_bson,
    },
};

const KNOWN_FIELDS: &[&str] = &[
    "course_code",
    "ruz_auditorium",
    "ruz_lecturer_title",
    "ruz_lesson_oid",
    "ruz_auditorium_oid",
    "ruz_building",
    "ruz_building_oid",
    "ruz_discipline",
    "ruz_discipline_oid",
    "ruz_kind_of_work",
    "ruz_kind_of_work_oid",
    "ruz_lecturer_email",
    "ruz_url",
    "gcalendar_event_id",
    "gcalendar_calendar_id",
    "start_time",
    "end_time",
    "date",
];

impl DocumentFields for LessonFields {
    fn from_document(document: &Document) -> Result<Self, CoreError> {
        let reader = FieldReader::new(document, "Lesson");

        Ok(LessonFields {
            course_code: reader.string("course_code")?,
            ruz_auditorium: reader.string("ruz_auditorium")?,
            ruz_lecturer_title: reader.string("ruz_lecturer_title")?,
            ruz_lesson_oid: reader.int("ruz_lesson_oid")?,
            ruz_auditorium_oid: reader.opt_int("ruz_auditorium_oid"),
            ruz_building: reader.opt_string("ruz_building"),
            ruz_building_oid: reader.opt_int("ruz_building_oid"),
            ruz_discipline: reader.opt_string("ruz_discipline"),
            ruz_discipline_oid: reader.opt_int("ruz_discipline_oid"),
            ruz_kind_of_work: reader.opt_string("ruz_kind_of_work"),
            ruz_kind_of_work_oid: reader.opt_int("ruz_kind_of_work_oid"),
            ruz_lecturer_email: reader.opt_string("ruz_lecturer_email"),
            ruz_url: reader.opt_string("ruz_url"),
            gcalendar_event_id: reader.opt_string("gcalendar_event_id"),
            gcalendar_calendar_id: reader.opt_string("gcalendar_calendar_id"),
            start_time: reader.timestamp("start_time")?,
            end_time: reader.timestamp("end_time")?,
            extra: reader.extra(KNOWN_FIELDS),
        })
    }

    fn into_document(self) -> Document {
        let mut document = doc! {
            "course_code": self.course_code,
            "ruz_auditorium": self.ruz_auditorium,
            "ruz_lecturer_title": self.ruz_lecturer_title,
            "ruz_lesson_oid": self.ruz_lesson_oid,
        };
        insert_opt(&mut document, "ruz_auditorium_oid", self.ruz_auditorium_oid);
        insert_opt(&mut document, "ruz_building", self.ruz_building);
        insert_opt(&mut document, "ruz_building_oid", self.ruz_building_oid);
        insert_opt(&mut document, "ruz_discipline", self.ruz_discipline);
        insert_opt(&mut document, "ruz_discipline_oid", self.ruz_discipline_oid);
        insert_opt(&mut document, "ruz_kind_of_work", self.ruz_kind_of_work);
        insert_opt(&mut document, "ruz_kind_of_work_oid", self.ruz_kind_of_work_oid);
        insert_opt(&mut document, "ruz_lecturer_email", self.ruz_lecturer_email);
        insert_opt(&mut document, "ruz_url", self.ruz_url);
        insert_opt(&mut document, "gcalendar_event_id", self.gcalendar_event_id);
        insert_opt(&mut document, "gcalendar_calendar_id", self.gcalendar_calendar_id);
        document.insert("start_time", timestamp_bson(self.start_time));
        document.insert("end_time", timestamp_bson(self.end_time));
        insert_extra(&mut document, self.extra);
        document
    }

    fn validate(&self) -> Result<(), CoreError> {
        ensure_filled("Lesson", "course_code", &self.course_code)?;
        ensure_ordered("Lesson", self.start_time, self.end_time)
    }

    fn secondary_key(&self) -> Option<(&'static str, FilterValue)> {
        Some(("ruz_lesson_oid", FilterValue::from(self.ruz_lesson_oid)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn reads_lessons_stored_with_textual_times() {
        let document = doc! {
            "_id": "legacy",
            "course_code": "Ф_Б2019_ИТСС_3",
            "ruz_auditorium": "104",
            "ruz_lecturer_title": "Даниил Мирталибов",
            "ruz_lesson_oid": 7735895,
            "ruz_building": "Таллинская ул., д, 34",
            "start_time": "2020-12-15T09:30:00",
            "end_time": "2020-12-15T10:50:00",
            "schedule_group": "БИТ191",
        };

        let fields = LessonFields::from_document(&document).unwrap();
        assert_eq!(fields.ruz_lesson_oid, 7_735_895);
        assert_eq!(
            fields.start_time,
            Utc.with_ymd_and_hms(2020, 12, 15, 9, 30, 0).unwrap()
        );
        assert_eq!(fields.extra.get("schedule_group"), Some(&serde_json::json!("БИТ191")));
        assert!(!fields.extra.contains_key("_id"));

        let written = fields.into_document();
        assert!(matches!(written.get("start_time"), Some(bson::Bson::DateTime(_))));
        assert_eq!(written.get_str("schedule_group").unwrap(), "БИТ191");
    }
}
