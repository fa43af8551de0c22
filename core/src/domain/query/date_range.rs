use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer};

use super::filter::Filter;
use crate::domain::common::entities::app_errors::CoreError;

const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// One side of a requested date range, as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Instant(DateTime<Utc>),
    /// A bare calendar date: covers the whole day (UTC).
    Day(NaiveDate),
}

impl DateBound {
    pub fn lower(&self) -> DateTime<Utc> {
        match self {
            DateBound::Instant(instant) => *instant,
            DateBound::Day(day) => day.and_time(NaiveTime::MIN).and_utc(),
        }
    }

    pub fn upper(&self) -> DateTime<Utc> {
        match self {
            DateBound::Instant(instant) => *instant,
            DateBound::Day(day) => {
                day.and_time(NaiveTime::MIN).and_utc() + TimeDelta::days(1)
                    - TimeDelta::milliseconds(1)
            }
        }
    }
}

/// Accepts RFC 3339, naive date-times (assumed UTC) and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<DateBound>().ok().map(|bound| bound.lower())
}

/// Serde adapter for timestamp fields taking the same formats as
/// [`parse_timestamp`].
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "Invalid datetime format: {}. Expected RFC3339 (e.g., '2021-01-01T09:30:00Z') \
             or ISO 8601 without timezone (e.g., '2021-01-01T09:30:00')",
            raw
        ))
    })
}

impl FromStr for DateBound {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
            return Ok(DateBound::Instant(instant.with_timezone(&Utc)));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(DateBound::Instant(naive.and_utc()));
            }
        }

        if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DateBound::Day(day));
        }

        Err(CoreError::Validation(format!(
            "Invalid date format: '{s}'. Expected RFC 3339 (e.g. '2021-01-01T09:30:00Z'), \
             'YYYY-MM-DDTHH:MM[:SS]' or 'YYYY-MM-DD'"
        )))
    }
}

/// Which stored fields carry the time of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Point(&'static str),
    Interval {
        start: &'static str,
        end: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// A range whose bounds were given in the wrong order is flipped rather
    /// than rejected.
    pub fn new(from: Option<DateBound>, to: Option<DateBound>) -> Self {
        match (from, to) {
            (Some(from), Some(to)) if from.lower() > to.upper() => Self {
                from: Some(to.lower()),
                to: Some(from.upper()),
            },
            (from, to) => Self {
                from: from.map(|bound| bound.lower()),
                to: to.map(|bound| bound.upper()),
            },
        }
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self::new(Some(DateBound::Instant(from)), Some(DateBound::Instant(to)))
    }

    pub fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn compile(&self, field: TimeField) -> Filter {
        match (self.from, self.to, field) {
            (None, None, _) => Filter::All,

            (Some(from), None, TimeField::Point(at)) => Filter::gte(at, from),
            (Some(from), None, TimeField::Interval { start, .. }) => Filter::gte(start, from),

            (None, Some(to), TimeField::Point(at)) => Filter::lte(at, to),
            (None, Some(to), TimeField::Interval { end, .. }) => Filter::lte(end, to),

            (Some(from), Some(to), TimeField::Point(at)) => {
                Filter::and([Filter::gte(at, from), Filter::lte(at, to)])
            }
            // ends inside the range, spans the range, or starts inside the range
            (Some(from), Some(to), TimeField::Interval { start, end }) => Filter::or([
                Filter::and([Filter::gte(end, from), Filter::lte(end, to)]),
                Filter::and([Filter::gte(end, to), Filter::lte(start, from)]),
                Filter::and([Filter::gte(start, from), Filter::lte(start, to)]),
            ]),
        }
    }
}
