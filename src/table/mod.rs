// In: src/table/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Table Engine
// ====================================================================================
//
// A presentation-agnostic, synchronous state machine over an already-fetched,
// fully in-memory record set. Nothing here suspends, blocks or performs I/O.
//
// Data Flow (one interaction):
//
//   1. [Stateful Facade (TableEngine)]      -> Receives set_sort / set_filter / set_page ...
//         |
//         `-> wraps the request as a `TableAction`
//
//   2. [State Machine (transitions::reduce)] -> (state, action) -> state
//         |
//         `-> capability checks against the `ColumnDescriptor`s
//
//   3. [Stateful Facade]                    -> swaps in the new `TableViewState`
//
//
// Data Flow (one read):
//
//   1. [Row Model (row_model)] -> filter (AND of column predicates on raw values)
//         |
//         `-> sort (single column, stable, Missing last)
//         |
//         `-> paginate (clamped slice)
//
//   2. [Stateful Facade]       -> returns the materialized view as `Vec<&R>`
//
// Column `render` callbacks are only ever consulted by `render_cell`; they
// never reach the row model.
// ====================================================================================
pub mod column;
pub mod engine;
pub(crate) mod row_model;
pub mod state;
pub mod transitions;

pub use column::{ColumnDescriptor, Renderer};
pub use engine::TableEngine;
pub use state::{
    FilterValue, Pagination, RowSelection, SortDirection, SortState, TableOptions,
    TableViewState, DEFAULT_PAGE_SIZE,
};
pub use transitions::{reduce, TableAction, TransitionContext};

#[cfg(test)]
mod tests;
