//! Derived view of the record set.
//!
//! The displayed list is a pure function of the records, the
//! [`ViewQuery`] and the favorites set:
//!
//! ```text
//! RecordSet ──► search filter ──► favorites filter ──► stable sort ──► page slice
//! ```
//!
//! ## Components
//!
//! - [`query`]: [`ViewQuery`], [`SortKey`], [`SortDirection`]
//! - [`pipeline`]: the filter and sort stage ([`compute`])
//! - [`page`]: pagination helpers and the page strip
//! - [`ViewState`]: immutable state updated through [`ViewAction`]s

pub mod page;
pub mod pipeline;
pub mod query;
mod view;

pub use page::{page, total_pages, visible_pages, Page, PageMarker, PAGE_SIZE};
pub use pipeline::{compute, matches_search};
pub use query::{SortDirection, SortKey, ViewQuery};
pub use view::{DerivedView, ViewAction, ViewState};
