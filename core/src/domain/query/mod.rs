//! Building blocks shared by every list endpoint: identifier parsing, filter
//! construction, date ranges, paging and result normalization.

pub mod args;
pub mod date_range;
pub mod executor;
pub mod filter;
pub mod identifier;
pub mod normalize;
pub mod page;

pub use args::SuppliedArgs;
pub use date_range::{DateBound, DateRange, TimeField};
pub use executor::fetch_page;
pub use filter::{Filter, FilterValue};
pub use identifier::DocumentId;
pub use normalize::normalize;
pub use page::{ListQuery, PageRequest, SortDirection, SortSpec};
