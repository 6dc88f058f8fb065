//! Timeline row construction.
//!
//! Turns paginated raw entries into one append-only sequence of display rows:
//! date separators, single commits and folded commit groups.
//!
//! # Module Structure
//!
//! - `classify`: Row Classifier - which kind of row a raw entry becomes
//! - `day_boundary`: calendar-day comparison used for separator placement
//! - `row`: the `Row` sum type
//! - `builder`: `TimelineBuilder` - folds a page into the existing row sequence

pub mod builder;
pub mod classify;
pub mod day_boundary;
pub mod row;

pub use builder::{Extension, TimelineBuilder};
pub use classify::{classify, classify_entry, ClassifiedEntry, RowKind};
pub use day_boundary::{calendar_date_in, is_same_day, is_same_day_in};
pub use row::Row;
