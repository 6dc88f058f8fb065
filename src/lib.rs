//! History Timeline
//!
//! Builds the display rows of a paginated version history: day separators,
//! single commits and folded groups of inactive commits. Pages arrive one at a
//! time and are appended without touching rows already built.
//!
//! Pure Core / Impure Shell: `model`, `timeline` and `view_state` are pure;
//! `source`, `config`, `logging` and the binary do the I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod source;
pub mod state;
pub mod timeline;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;
