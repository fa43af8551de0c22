use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use super::identifier::DocumentId;

/// Name of the primary-key field inside the store.
pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Int(i64),
    Bool(bool),
    DateTime(DateTime<Utc>),
    Id(DocumentId),
}

impl FilterValue {
    /// Empty or whitespace-only strings count as "not supplied".
    pub fn is_blank(&self) -> bool {
        matches!(self, FilterValue::String(s) if s.trim().is_empty())
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::String(s) => f.write_str(s),
            FilterValue::Int(i) => write!(f, "{i}"),
            FilterValue::Bool(b) => write!(f, "{b}"),
            FilterValue::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            FilterValue::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::DateTime(value)
    }
}

impl From<DocumentId> for FilterValue {
    fn from(value: DocumentId) -> Self {
        FilterValue::Id(value)
    }
}

/// Store-neutral filter expression.
///
/// Field names may be dotted paths into nested documents or arrays
/// (`additional.room_id`, `keywords.0`). An equality probe against an array
/// field matches when any element is equal.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    All,
    Eq(String, FilterValue),
    Ne(String, FilterValue),
    Gte(String, FilterValue),
    Lte(String, FilterValue),
    In(String, Vec<FilterValue>),
    NonEmptyArray(String),
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter::Ne(field.into(), value.into())
    }

    pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter::Gte(field.into(), value.into())
    }

    pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter::Lte(field.into(), value.into())
    }

    pub fn one_of<V>(field: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<FilterValue>,
    {
        Filter::In(field.into(), values.into_iter().map(Into::into).collect())
    }

    pub fn non_empty_array(field: impl Into<String>) -> Self {
        Filter::NonEmptyArray(field.into())
    }

    pub fn id(id: DocumentId) -> Self {
        Filter::eq(ID_FIELD, id)
    }

    /// Conjunction that drops `All` operands and flattens nested conjunctions.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        let mut clauses = Vec::new();
        for filter in filters {
            match filter {
                Filter::All => {}
                Filter::And(inner) => clauses.extend(inner),
                other => clauses.push(other),
            }
        }

        match clauses.len() {
            0 => Filter::All,
            1 => clauses.remove(0),
            _ => Filter::And(clauses),
        }
    }

    /// Disjunction; any `All` operand makes the whole clause `All`.
    /// An empty disjunction is also treated as `All`.
    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        let mut clauses = Vec::new();
        for filter in filters {
            match filter {
                Filter::All => return Filter::All,
                Filter::Or(inner) => clauses.extend(inner),
                other => clauses.push(other),
            }
        }

        match clauses.len() {
            0 => Filter::All,
            1 => clauses.remove(0),
            _ => Filter::Or(clauses),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_flattens_and_drops_match_all() {
        let filter = Filter::and([
            Filter::All,
            Filter::eq("name", "504"),
            Filter::and([Filter::eq("type", "ONVIF"), Filter::All]),
        ]);

        assert_eq!(
            filter,
            Filter::And(vec![Filter::eq("name", "504"), Filter::eq("type", "ONVIF")])
        );
    }

    #[test]
    fn and_of_nothing_matches_everything() {
        assert!(Filter::and([Filter::All, Filter::All]).is_all());
        assert!(Filter::and(Vec::new()).is_all());
    }

    #[test]
    fn single_clause_is_unwrapped() {
        assert_eq!(
            Filter::and([Filter::eq("name", "504")]),
            Filter::eq("name", "504")
        );
        assert_eq!(
            Filter::or([Filter::eq("name", "504")]),
            Filter::eq("name", "504")
        );
    }

    #[test]
    fn or_with_match_all_operand_matches_everything() {
        assert!(Filter::or([Filter::eq("name", "504"), Filter::All]).is_all());
    }

    #[test]
    fn blank_strings_are_detected() {
        assert!(FilterValue::from("").is_blank());
        assert!(FilterValue::from("   ").is_blank());
        assert!(!FilterValue::from("504").is_blank());
        assert!(!FilterValue::from(0).is_blank());
    }
}
