//! Derived views
//!
//! Read-only projections over the task collection and the remote data.
//! Nothing here mutates its input.

mod filter;
mod pagination;
mod search;

pub use filter::TaskFilter;
pub use pagination::{Page, PageCursor, Paginator, DEFAULT_PAGE_SIZE};
pub use search::{search, Searchable};
