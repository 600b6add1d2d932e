//! # tether-query
//!
//! Validation helpers for list endpoints: clamped pagination, whitelisted
//! sorting, and search-term escaping. Everything here is total — malformed
//! input is corrected by clamping or fallback, never signaled as an error.
//! These are UI-state helpers, not protocol validators.

pub mod pagination;
pub mod search;
pub mod sort;

pub use pagination::{validate, PageParams, PageRequest, DEFAULT_LIMIT, MAX_LIMIT};
pub use search::escape_like;
pub use sort::{OrderSpec, SortDirection, SortableColumns};
