// In: src/table/state.rs

//! The interactive, ephemeral state of one table view.
//!
//! A `TableViewState` is created when a view mounts, mutated only through
//! `TableAction`s, and dropped when the view goes away. It is never persisted
//! and never shared between views.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;
use crate::types::{CellValue, RowId};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

//==================================================================================
// I. Sorting
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_key: column_key.into(),
            direction,
        }
    }
}

//==================================================================================
// II. Filtering
//==================================================================================

/// A predicate over a column's raw values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    /// Case-insensitive substring match against the value's raw text.
    Contains(String),
    /// Accepts any value in the set. Used by faceted pickers.
    OneOf(Vec<CellValue>),
}

impl FilterValue {
    pub fn contains(needle: impl Into<String>) -> Self {
        FilterValue::Contains(needle.into())
    }

    pub fn one_of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        FilterValue::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// An empty filter removes the column's predicate rather than matching nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Contains(needle) => needle.is_empty(),
            FilterValue::OneOf(values) => values.is_empty(),
        }
    }

    pub fn matches(&self, value: &CellValue) -> bool {
        match self {
            FilterValue::Contains(needle) => value
                .to_string()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            FilterValue::OneOf(values) => values.contains(value),
        }
    }
}

//==================================================================================
// III. Pagination & Selection
//==================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Pagination {
    /// Number of pages for `row_count` rows. An empty table still has one (empty) page.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    /// Index of the last valid page for `row_count` rows.
    pub fn last_page(&self, row_count: usize) -> usize {
        self.page_count(row_count) - 1
    }
}

/// Row selection is part of the interface but never enabled in this deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: HashSet<RowId>,
}

impl RowSelection {
    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn selected(&self) -> &HashSet<RowId> {
        &self.selected
    }
}

//==================================================================================
// IV. Options & State
//==================================================================================

/// How a view starts out, and what `Reset` returns it to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    initial_sort: Option<SortState>,
    page_size: usize,
}

impl TableOptions {
    pub fn new(page_size: usize) -> Result<Self, LeaderboardError> {
        if page_size == 0 {
            return Err(LeaderboardError::InvalidConfig(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            initial_sort: None,
            page_size,
        })
    }

    pub fn with_initial_sort(mut self, sort: Option<SortState>) -> Self {
        self.initial_sort = sort;
        self
    }

    pub fn initial_sort(&self) -> Option<&SortState> {
        self.initial_sort.as_ref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            initial_sort: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableViewState {
    pub sort: Option<SortState>,
    /// Columns absent from the map are visible.
    pub column_visibility: HashMap<String, bool>,
    pub filters: HashMap<String, FilterValue>,
    pub pagination: Pagination,
    pub row_selection: RowSelection,
}

impl TableViewState {
    pub fn new(options: &TableOptions) -> Self {
        Self {
            sort: options.initial_sort.clone(),
            column_visibility: HashMap::new(),
            filters: HashMap::new(),
            pagination: Pagination {
                page_index: 0,
                page_size: options.page_size,
            },
            row_selection: RowSelection::default(),
        }
    }

    pub fn is_column_visible(&self, column_key: &str) -> bool {
        self.column_visibility
            .get(column_key)
            .copied()
            .unwrap_or(true)
    }

    pub fn filter_for(&self, column_key: &str) -> Option<&FilterValue> {
        self.filters.get(column_key)
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new(&TableOptions::default())
    }
}
