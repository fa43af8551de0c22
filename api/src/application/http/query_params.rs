use erudite_core::domain::query::{DateBound, DateRange, SortSpec};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Parses a sort string like "field1,-field2,field3".
pub fn parse_sort(raw: Option<&str>) -> Vec<SortSpec> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_prefix('-') {
            Some(field) => SortSpec::desc(field),
            None => SortSpec::asc(part.strip_prefix('+').unwrap_or(part)),
        })
        .collect()
}

/// `fromdate` / `todate` pair; blank values count as absent.
pub fn date_range(fromdate: Option<&str>, todate: Option<&str>) -> Result<DateRange, ApiError> {
    let from = parse_bound(fromdate)?;
    let to = parse_bound(todate)?;

    Ok(DateRange::new(from, to))
}

fn parse_bound(raw: Option<&str>) -> Result<Option<DateBound>, ApiError> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => raw.parse::<DateBound>().map(Some).map_err(ApiError::from),
        None => Ok(None),
    }
}
