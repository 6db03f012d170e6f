// In: src/table/engine.rs

//! The stateful facade over the pure row model and state machine.
//!
//! A `TableEngine` owns one fully in-memory record set, its column
//! descriptors and one `TableViewState`. Reads (`visible_rows`,
//! `faceted_values`, ...) are deterministic functions of those three.

use hashbrown::HashMap;

use crate::error::LeaderboardError;
use crate::table::column::{find_column, ColumnDescriptor};
use crate::table::row_model;
use crate::table::state::{FilterValue, TableOptions, TableViewState};
use crate::table::transitions::{reduce, TableAction, TransitionContext};
use crate::types::{CellValue, Record, RowId};

pub struct TableEngine<R> {
    records: Vec<R>,
    columns: Vec<ColumnDescriptor<R>>,
    options: TableOptions,
    state: TableViewState,
}

impl<R: Record> TableEngine<R> {
    pub fn new(records: Vec<R>, columns: Vec<ColumnDescriptor<R>>, options: TableOptions) -> Self {
        let state = TableViewState::new(&options);
        Self {
            records,
            columns,
            options,
            state,
        }
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[ColumnDescriptor<R>] {
        &self.columns
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    //==================================================================================
    // I. Transitions
    //==================================================================================

    /// Applies one action through the state machine. On error the state is untouched.
    pub fn dispatch(&mut self, action: TableAction) -> Result<(), LeaderboardError> {
        let ctx = TransitionContext {
            columns: &self.columns,
            filtered_count: self.filtered_count(),
            options: &self.options,
        };
        match reduce(&self.state, &action, &ctx) {
            Ok(next) => {
                log_metric!(
                    "event" = "table_transition",
                    "action" = format!("{:?}", action),
                    "page_index" = next.pagination.page_index
                );
                self.state = next;
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected table action {:?}: {}", action, err);
                Err(err)
            }
        }
    }

    pub fn set_sort(&mut self, column_key: &str) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::SetSort {
            column_key: column_key.to_string(),
        })
    }

    pub fn set_column_visibility(
        &mut self,
        column_key: &str,
        visible: bool,
    ) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::SetColumnVisibility {
            column_key: column_key.to_string(),
            visible,
        })
    }

    pub fn set_filter(
        &mut self,
        column_key: &str,
        value: Option<FilterValue>,
    ) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::SetFilter {
            column_key: column_key.to_string(),
            value,
        })
    }

    pub fn clear_filter(&mut self, column_key: &str) -> Result<(), LeaderboardError> {
        self.set_filter(column_key, None)
    }

    pub fn set_page(&mut self, page_index: usize) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::SetPage { page_index })
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::SetPageSize { page_size })
    }

    pub fn next_page(&mut self) -> Result<(), LeaderboardError> {
        self.set_page(self.state.pagination.page_index + 1)
    }

    pub fn previous_page(&mut self) -> Result<(), LeaderboardError> {
        self.set_page(self.state.pagination.page_index.saturating_sub(1))
    }

    pub fn select_row(&mut self, row_id: &str) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::SelectRow {
            row_id: row_id.to_string(),
        })
    }

    pub fn reset(&mut self) -> Result<(), LeaderboardError> {
        self.dispatch(TableAction::Reset)
    }

    /// Installs a new snapshot. Sort, filters and visibility carry over; the
    /// page index is re-clamped against the new filtered length.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        let page_index = self.state.pagination.page_index;
        // SetPage clamps against the new filtered length and cannot fail.
        if let Err(err) = self.dispatch(TableAction::SetPage { page_index }) {
            log::warn!("Could not re-clamp page after replacing records: {}", err);
        }
    }

    //==================================================================================
    // II. Materialized View
    //==================================================================================

    fn sorted_filtered_indices(&self) -> Vec<usize> {
        let mut indices = row_model::filter_indices(&self.records, &self.state.filters, None);
        row_model::sort_indices(&self.records, &mut indices, self.state.sort.as_ref());
        indices
    }

    pub fn filtered_count(&self) -> usize {
        row_model::filter_indices(&self.records, &self.state.filters, None).len()
    }

    pub fn page_count(&self) -> usize {
        self.state.pagination.page_count(self.filtered_count())
    }

    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.state.pagination.page_index + 1 < self.page_count()
    }

    /// All rows after filter and sort, across every page.
    pub fn sorted_rows(&self) -> Vec<&R> {
        self.sorted_filtered_indices()
            .into_iter()
            .map(|idx| &self.records[idx])
            .collect()
    }

    /// The rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        let indices = self.sorted_filtered_indices();
        let range = row_model::page_range(indices.len(), &self.state.pagination);
        indices[range]
            .iter()
            .map(|&idx| &self.records[idx])
            .collect()
    }

    pub fn visible_row_ids(&self) -> Vec<RowId> {
        self.visible_rows().iter().map(|r| r.row_id()).collect()
    }

    /// Value -> count for `column_key`, honoring every filter except the column's own.
    pub fn faceted_values(&self, column_key: &str) -> HashMap<CellValue, usize> {
        if find_column(&self.columns, column_key).is_none() {
            log::warn!("No facets for unknown column '{}'", column_key);
            return HashMap::new();
        }
        let indices =
            row_model::filter_indices(&self.records, &self.state.filters, Some(column_key));
        row_model::facet_counts(&self.records, &indices, column_key)
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<R>> {
        self.columns
            .iter()
            .filter(|c| self.state.is_column_visible(&c.key))
            .collect()
    }

    /// Display text for one cell. Unknown columns render as empty text.
    pub fn render_cell(&self, record: &R, column_key: &str) -> String {
        match find_column(&self.columns, column_key) {
            Some(column) => column.render(&record.value(column_key), record),
            None => String::new(),
        }
    }
}
