//! Session state owned by the application.
//!
//! - [`FavoritesStore`]: ids the user marked as favorite
//! - [`FetchStatus`]: loading/error state of the record source

pub mod favorites;
pub mod fetch;

pub use favorites::FavoritesStore;
pub use fetch::{FetchStatus, FetchTicket};
