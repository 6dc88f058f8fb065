//! Mutable timeline state.
//!
//! - `fold_state`: Fold-State Store - expansion flags keyed by row index
//! - `history`: HistoryTimeline - rows, fold state and heights of one history context
//! - `expand_handler`: fold commands (toggle, expand all, collapse all)

pub mod expand_handler;
pub mod fold_state;
pub mod history;

pub use expand_handler::{handle_fold_command, FoldCommand};
pub use fold_state::FoldStateStore;
pub use history::{HistoryTimeline, PageReport};
