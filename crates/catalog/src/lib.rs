//! Book records and the payloads used to create and change them.
//!
//! - [`models::Book`] is the stored record, [`models::BookInput`] and
//!   [`models::BookPatch`] are the create and update payloads.
//! - [`source`] maps upstream placeholder records onto books.
//! - [`validate()`] reports (but never enforces) the record constraints.

pub mod error;
pub mod models;
pub mod source;
mod validate;

pub use crate::validate::{
    AUTHOR_LENGTH, MAX_RATING, MIN_PUBLISHED_YEAR, TITLE_LENGTH, Violation, validate,
};
use time::UtcDateTime;

/// The current calendar year (UTC), the upper bound for publication years.
pub fn current_year() -> i32 {
    UtcDateTime::now().year()
}
