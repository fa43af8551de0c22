use std::fmt;

use crate::domain::query::{Filter, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Equipment,
    Rooms,
    Disciplines,
    Lessons,
    Records,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Equipment,
        Collection::Rooms,
        Collection::Disciplines,
        Collection::Lessons,
        Collection::Records,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Equipment => "equipment",
            Collection::Rooms => "rooms",
            Collection::Disciplines => "disciplines",
            Collection::Lessons => "lessons",
            Collection::Records => "records",
        }
    }

    /// Singular, human-readable name used in response messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Collection::Equipment => "Equipment",
            Collection::Rooms => "Room",
            Collection::Disciplines => "Discipline",
            Collection::Lessons => "Lesson",
            Collection::Records => "Record",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FindQuery {
    pub filter: Filter,
    pub sort: Vec<SortSpec>,
    pub skip: u64,
    pub limit: Option<i64>,
}

impl FindQuery {
    /// Unsorted, unbounded query over every document matching `filter`.
    pub fn all(filter: Filter) -> Self {
        Self {
            filter,
            sort: Vec::new(),
            skip: 0,
            limit: None,
        }
    }
}
