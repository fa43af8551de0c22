use tracing::debug;

use super::{
    args::SuppliedArgs,
    date_range::{DateRange, TimeField},
    filter::{Filter, ID_FIELD},
};
use crate::domain::store::value_objects::FindQuery;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based, offset paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u32,
    page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page_number: page_number.unwrap_or(0),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn skip(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Drops sort keys on fields the entity does not expose for sorting.
    pub fn retain_sortable(sorts: Vec<SortSpec>, sortable: &[&str]) -> Vec<SortSpec> {
        sorts
            .into_iter()
            .filter(|sort| {
                let known = sortable.contains(&sort.field.as_str());
                if !known {
                    debug!(field = %sort.field, "ignoring sort on unknown field");
                }
                known
            })
            .collect()
    }
}

/// Everything a list endpoint needs to fetch one page: filters (AND-ed
/// together), ordering and the page window.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    filters: Vec<Filter>,
    sort: Vec<SortSpec>,
    page: PageRequest,
}

impl ListQuery {
    pub fn new(page: PageRequest) -> Self {
        Self {
            filters: Vec::new(),
            sort: Vec::new(),
            page,
        }
    }

    pub fn matching(mut self, args: SuppliedArgs) -> Self {
        self.filters.push(args.into_filter());
        self
    }

    pub fn filtered(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn within(mut self, range: &DateRange, field: TimeField) -> Self {
        self.filters.push(range.compile(field));
        self
    }

    /// Explicit sort keys win; `fallback` applies when none were given.
    pub fn sorted_by(mut self, sort: Vec<SortSpec>, fallback: Vec<SortSpec>) -> Self {
        self.sort = if sort.is_empty() { fallback } else { sort };
        self
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn filter(&self) -> Filter {
        Filter::and(self.filters.iter().cloned())
    }

    /// The primary key is always appended as the last sort key so that pages
    /// are stable across requests.
    pub fn into_find_query(self) -> FindQuery {
        let filter = self.filter();
        let mut sort = self.sort;
        if !sort.iter().any(|s| s.field == ID_FIELD) {
            sort.push(SortSpec::asc(ID_FIELD));
        }

        FindQuery {
            filter,
            sort,
            skip: self.page.skip(),
            limit: Some(self.page.limit()),
        }
    }
}
