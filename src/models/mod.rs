//! Data model for fetched user records.
//!
//! - [`UserRecord`] with its nested [`Address`] and [`Company`]
//! - [`RecordSet`], the ordered collection replaced on every fetch

mod record_set;
mod user;

pub use record_set::{RecordSet, RECORD_LIMIT};
pub use user::{Address, Company, UserRecord};
