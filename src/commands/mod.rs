//! Command implementations

pub mod import;
pub mod play;
pub mod stats;
pub mod words;

pub use import::{ImportReport, ImportSource, run_import};
pub use play::run_play;
pub use stats::{StatsSummary, compute_stats};
pub use words::{run_add, run_delete, run_list, run_set_enabled, run_set_nsfw};
