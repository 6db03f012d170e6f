// In: src/table/row_model.rs

//! Pure row-model stages: filter -> sort -> paginate, plus facet counting.
//!
//! Each stage works on indices into the caller's record slice, so records
//! are never cloned or reordered in place.

use std::cmp::Ordering;
use std::ops::Range;

use hashbrown::HashMap;

use crate::table::state::{FilterValue, Pagination, SortDirection, SortState};
use crate::types::{CellValue, Record};

/// Indices of records passing every filter (logical AND), in input order.
/// `skip_column` leaves that column's own predicate out, for faceting.
pub(crate) fn filter_indices<R: Record>(
    records: &[R],
    filters: &HashMap<String, FilterValue>,
    skip_column: Option<&str>,
) -> Vec<usize> {
    let active: Vec<(&String, &FilterValue)> = filters
        .iter()
        .filter(|(key, _)| Some(key.as_str()) != skip_column)
        .collect();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            active
                .iter()
                .all(|(key, filter)| filter.matches(&record.value(key)))
        })
        .map(|(idx, _)| idx)
        .collect()
}

/// Stable single-column sort. `Missing` values go last in both directions.
pub(crate) fn sort_indices<R: Record>(
    records: &[R],
    indices: &mut [usize],
    sort: Option<&SortState>,
) {
    let Some(sort) = sort else {
        return;
    };
    let key = sort.column_key.as_str();
    let mut keyed: Vec<(CellValue, usize)> = indices
        .iter()
        .map(|&idx| (records[idx].value(key), idx))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, sort.direction));

    for (slot, (_, idx)) in indices.iter_mut().zip(keyed) {
        *slot = idx;
    }
}

fn compare_values(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
    }
}

/// The slice of `total` rows shown on the current page. Out-of-range pages
/// are clamped to the last valid page.
pub(crate) fn page_range(total: usize, pagination: &Pagination) -> Range<usize> {
    let page_index = pagination.page_index.min(pagination.last_page(total));
    let start = (page_index * pagination.page_size).min(total);
    let end = (start + pagination.page_size).min(total);
    start..end
}

/// Counts of each raw value of `key` across the given records.
pub(crate) fn facet_counts<R: Record>(
    records: &[R],
    indices: &[usize],
    key: &str,
) -> HashMap<CellValue, usize> {
    let mut counts = HashMap::new();
    for &idx in indices {
        *counts.entry(records[idx].value(key)).or_insert(0) += 1;
    }
    counts
}
