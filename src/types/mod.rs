//! This module defines the core, strongly-typed data representations shared by
//! the classifier and the table engine.
//!
//! It currently includes the `CellValue` enum, the raw (pre-render) value of a
//! single table cell, and the `Record` trait every table row type implements.

pub mod cell_value;

// Re-export the main type(s) for easier access.
pub use cell_value::{CellValue, Record, RowId};
