// In: src/table/transitions.rs

//! The table's state machine.
//!
//! Every interaction is a `TableAction`, and `reduce` is the single pure
//! function `(state, action) -> state` that applies it. The engine never
//! mutates `TableViewState` any other way.

use crate::error::LeaderboardError;
use crate::table::column::{find_column, ColumnDescriptor};
use crate::table::state::{
    FilterValue, SortDirection, SortState, TableOptions, TableViewState,
};
use crate::types::RowId;

#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Header click: unsorted -> Asc -> Desc -> unsorted on the same column.
    SetSort { column_key: String },
    SetColumnVisibility { column_key: String, visible: bool },
    /// `None` (or an empty filter) removes the column's predicate.
    SetFilter {
        column_key: String,
        value: Option<FilterValue>,
    },
    SetPage { page_index: usize },
    SetPageSize { page_size: usize },
    SelectRow { row_id: RowId },
    Reset,
}

/// Everything `reduce` needs besides the state itself.
pub struct TransitionContext<'a, R> {
    pub columns: &'a [ColumnDescriptor<R>],
    /// Row count after the current filters, before pagination.
    pub filtered_count: usize,
    pub options: &'a TableOptions,
}

/// Applies `action` to `state`.
///
/// Capability violations return `UnsupportedOperation`; unknown column keys
/// are ignored and return the state unchanged.
pub fn reduce<R>(
    state: &TableViewState,
    action: &TableAction,
    ctx: &TransitionContext<'_, R>,
) -> Result<TableViewState, LeaderboardError> {
    let mut next = state.clone();

    match action {
        TableAction::SetSort { column_key } => {
            let Some(column) = find_column(ctx.columns, column_key) else {
                log::warn!("Ignoring sort on unknown column '{}'", column_key);
                return Ok(next);
            };
            if !column.sortable {
                return Err(LeaderboardError::UnsupportedOperation(format!(
                    "column '{}' is not sortable",
                    column_key
                )));
            }
            next.sort = match &state.sort {
                Some(current) if current.column_key == *column_key => match current.direction {
                    SortDirection::Asc => Some(SortState::new(column_key.clone(), SortDirection::Desc)),
                    SortDirection::Desc => None,
                },
                _ => Some(SortState::new(column_key.clone(), SortDirection::Asc)),
            };
        }

        TableAction::SetColumnVisibility {
            column_key,
            visible,
        } => {
            let Some(column) = find_column(ctx.columns, column_key) else {
                log::warn!("Ignoring visibility change on unknown column '{}'", column_key);
                return Ok(next);
            };
            if !column.hideable {
                return Err(LeaderboardError::UnsupportedOperation(format!(
                    "column '{}' cannot be hidden",
                    column_key
                )));
            }
            next.column_visibility.insert(column_key.clone(), *visible);
        }

        TableAction::SetFilter { column_key, value } => {
            let Some(column) = find_column(ctx.columns, column_key) else {
                log::warn!("Ignoring filter on unknown column '{}'", column_key);
                return Ok(next);
            };
            if !column.filterable {
                return Err(LeaderboardError::UnsupportedOperation(format!(
                    "column '{}' is not filterable",
                    column_key
                )));
            }
            match value {
                Some(filter) if !filter.is_empty() => {
                    next.filters.insert(column_key.clone(), filter.clone());
                }
                _ => {
                    next.filters.remove(column_key.as_str());
                }
            }
            // A stale page index could point past the new filtered length.
            next.pagination.page_index = 0;
        }

        TableAction::SetPage { page_index } => {
            let last = next.pagination.last_page(ctx.filtered_count);
            next.pagination.page_index = (*page_index).min(last);
        }

        TableAction::SetPageSize { page_size } => {
            if *page_size == 0 {
                return Err(LeaderboardError::UnsupportedOperation(
                    "page size must be greater than zero".to_string(),
                ));
            }
            // Keep the previously-first-visible row on screen.
            let first_visible = state.pagination.page_index * state.pagination.page_size;
            next.pagination.page_size = *page_size;
            let last = next.pagination.last_page(ctx.filtered_count);
            next.pagination.page_index = (first_visible / page_size).min(last);
        }

        TableAction::SelectRow { row_id } => {
            return Err(LeaderboardError::UnsupportedOperation(format!(
                "row selection is disabled (requested '{}')",
                row_id
            )));
        }

        TableAction::Reset => {
            next = TableViewState::new(ctx.options);
        }
    }

    Ok(next)
}
