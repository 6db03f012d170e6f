//! This file is the root of the `tags_leaderboard` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`classifier`, `table`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the types a presentation host needs, so callers can write
//!     `tags_leaderboard::TableEngine` instead of reaching into submodules.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Used by `log_metric!` so callers need not depend on `log` themselves.
#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod classifier;
pub mod config;
pub mod course;
pub mod display;
pub mod error;
pub mod identity;
pub mod leaderboard;
pub mod table;
pub mod types;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use classifier::{classify, AnnotatedEntry, Classification, Movement, StandingsEntry};
pub use config::LeaderboardConfig;
pub use error::{LeaderboardError, Notice, NoticeLevel};
pub use identity::{load_user_profile, AuthContext, UserProfile, UserProfileClient};
pub use leaderboard::{LeaderboardView, StandingsSnapshot, StandingsSource};
pub use observability::init_logging;
pub use table::{
    ColumnDescriptor, FilterValue, SortDirection, SortState, TableAction, TableEngine,
    TableOptions, TableViewState,
};
pub use types::{CellValue, Record, RowId};
