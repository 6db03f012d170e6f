// In: src/leaderboard/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Leaderboard Layer
// ====================================================================================
//
// Glue between an external standings source and the two pure cores.
//
//   1. [StandingsSource]  -> fetch() -> StandingsSnapshot
//         |
//   2. [classifier::classify] -> Vec<AnnotatedEntry> (movement + band)
//         |
//   3. [TableEngine<AnnotatedEntry>] with `standings_columns()`
//         |
//   4. [LeaderboardView]  -> keeps the last-known-good table when 1 or 2 fail
//
// Round-by-round results (`RoundResult`) reuse the same table engine with
// their own column set.
// ====================================================================================
pub mod columns;
pub mod rounds;
pub mod source;
pub mod view;

pub use columns::{movement_indicator, standings_columns, COLUMN_HEADERS};
pub use rounds::{round_results_columns, RoundResult};
pub use source::{StandingsSnapshot, StandingsSource, StaticStandingsSource};
pub use view::LeaderboardView;
