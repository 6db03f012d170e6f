use super::*;
use crate::error::LeaderboardError;
use crate::types::{CellValue, Record, RowId};

/// Test row: a player line from a tags standings table.
#[derive(Debug, Clone)]
struct Row {
    id: u32,
    name: String,
    points: i64,
    tag: Option<i64>,
}

impl Record for Row {
    fn row_id(&self) -> RowId {
        format!("p-{}", self.id)
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            "position" => CellValue::from(self.id),
            "name" => CellValue::from(self.name.as_str()),
            "points" => CellValue::Int(self.points),
            "currentTag" => CellValue::from(self.tag),
            _ => CellValue::Missing,
        }
    }
}

fn row(id: u32, name: &str, points: i64, tag: Option<i64>) -> Row {
    Row {
        id,
        name: name.to_string(),
        points,
        tag,
    }
}

fn columns() -> Vec<ColumnDescriptor<Row>> {
    vec![
        ColumnDescriptor::new("position", "Position").hideable(false),
        ColumnDescriptor::new("name", "Name").filterable(true),
        // Renders in reverse so any leak of render output into sorting shows up.
        ColumnDescriptor::new("points", "Points Total")
            .filterable(true)
            .with_render(|value, _| format!("{} pts", 1000 - value.as_f64().unwrap_or(0.0) as i64)),
        ColumnDescriptor::new("currentTag", "Current Tag")
            .sortable(false)
            .filterable(true),
    ]
}

/// Helper: `count` generic rows with positions 1..=count.
fn numbered_rows(count: u32) -> Vec<Row> {
    (1..=count)
        .map(|i| row(i, &format!("Player {}", i), i64::from(100 - i), Some(i64::from(i % 5))))
        .collect()
}

fn sample_rows() -> Vec<Row> {
    vec![
        row(1, "Ben Riesenbach", 44, Some(6)),
        row(2, "Brandon Hasko", 41, Some(2)),
        row(3, "Andrew Stocklin", 31, Some(4)),
        row(4, "Scott Gay", 26, Some(9)),
        row(5, "Eric Brigandi", 22, Some(16)),
        row(6, "Steve Finger", 20, None),
    ]
}

fn engine(rows: Vec<Row>) -> TableEngine<Row> {
    TableEngine::new(rows, columns(), TableOptions::default())
}

fn ids(engine: &TableEngine<Row>) -> Vec<RowId> {
    engine.visible_row_ids()
}

#[test]
fn test_page_beyond_last_clamps_to_last_valid_page() {
    let mut t = engine(numbered_rows(20));
    t.set_page(5).unwrap();
    assert_eq!(t.state().pagination.page_index, 1);
    assert_eq!(t.visible_rows().len(), 10);
    assert_eq!(t.visible_rows()[0].id, 11);
    assert!(!t.can_next_page());
    assert!(t.can_previous_page());
}

#[test]
fn test_substring_filter_on_name() {
    let mut t = engine(sample_rows());
    t.set_filter("name", Some(FilterValue::contains("Ben"))).unwrap();
    assert_eq!(ids(&t), vec!["p-1".to_string()]);
    assert_eq!(t.filtered_count(), 1);
}

#[test]
fn test_visible_length_matches_page_arithmetic() {
    let mut t = engine(numbered_rows(23));
    for page in 0..4 {
        t.set_page(page).unwrap();
        let page_index = t.state().pagination.page_index;
        let page_size = t.state().pagination.page_size;
        let expected = page_size.min(t.filtered_count() - page_index * page_size);
        assert!(t.visible_rows().len() <= page_size);
        assert_eq!(t.visible_rows().len(), expected);
    }
    // Page 3 does not exist for 23 rows at 10 per page.
    assert_eq!(t.state().pagination.page_index, 2);
    assert_eq!(t.visible_rows().len(), 3);
}

#[test]
fn test_any_filter_resets_page_index() {
    let mut t = engine(numbered_rows(40));
    t.set_page(3).unwrap();
    assert_eq!(t.state().pagination.page_index, 3);
    t.set_filter("name", Some(FilterValue::contains("Player"))).unwrap();
    assert_eq!(t.state().pagination.page_index, 0);

    t.set_page(2).unwrap();
    t.clear_filter("name").unwrap();
    assert_eq!(t.state().pagination.page_index, 0);
}

#[test]
fn test_third_sort_click_restores_input_order() {
    let mut t = engine(sample_rows());
    let original = ids(&t);

    t.set_sort("name").unwrap();
    assert_eq!(t.visible_rows()[0].name, "Andrew Stocklin");
    t.set_sort("name").unwrap();
    assert_eq!(t.visible_rows()[0].name, "Steve Finger");
    t.set_sort("name").unwrap();
    assert!(t.state().sort.is_none());
    assert_eq!(ids(&t), original);
}

#[test]
fn test_sort_uses_raw_values_not_render_output() {
    let mut t = engine(sample_rows());
    t.set_sort("points").unwrap();
    let points: Vec<i64> = t.visible_rows().iter().map(|r| r.points).collect();
    assert_eq!(points, vec![20, 22, 26, 31, 41, 44]);
    // The renderer is still applied for display.
    let first = t.visible_rows()[0];
    assert_eq!(t.render_cell(first, "points"), "980 pts");
    assert_eq!(t.render_cell(first, "name"), "Steve Finger");
    assert_eq!(t.render_cell(first, "missing-column"), "");
}

#[test]
fn test_unsortable_column_rejected_state_unchanged() {
    let mut t = engine(sample_rows());
    t.set_sort("name").unwrap();
    let before = t.state().clone();
    let err = t.set_sort("currentTag").unwrap_err();
    assert!(matches!(err, LeaderboardError::UnsupportedOperation(_)));
    assert_eq!(t.state(), &before);
}

#[test]
fn test_unknown_column_operations_are_ignored() {
    let mut t = engine(sample_rows());
    let before = t.state().clone();
    t.set_sort("roundsPlayed").unwrap();
    t.set_filter("roundsPlayed", Some(FilterValue::contains("1"))).unwrap();
    t.set_column_visibility("roundsPlayed", false).unwrap();
    assert_eq!(t.state(), &before);
    assert!(t.faceted_values("roundsPlayed").is_empty());
}

#[test]
fn test_column_visibility() {
    let mut t = engine(sample_rows());
    t.set_column_visibility("currentTag", false).unwrap();
    let keys: Vec<&str> = t.visible_columns().iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["position", "name", "points"]);

    assert!(t.set_column_visibility("position", false).is_err());
    t.set_column_visibility("currentTag", true).unwrap();
    assert_eq!(t.visible_columns().len(), 4);
}

#[test]
fn test_filters_combine_with_and() {
    let mut t = engine(sample_rows());
    t.set_filter("name", Some(FilterValue::contains("b"))).unwrap();
    // Ben Riesenbach, Brandon Hasko, Eric Brigandi
    assert_eq!(t.filtered_count(), 3);
    t.set_filter("currentTag", Some(FilterValue::one_of([2i64, 16])))
        .unwrap();
    assert_eq!(ids(&t), vec!["p-2".to_string(), "p-5".to_string()]);
}

#[test]
fn test_faceted_values_ignore_own_filter_but_honor_others() {
    let mut t = engine(sample_rows());
    t.set_filter("currentTag", Some(FilterValue::one_of([6i64]))).unwrap();
    // Own filter ignored: every tag remains selectable.
    let tags = t.faceted_values("currentTag");
    assert_eq!(tags.len(), 6);
    assert_eq!(tags.get(&CellValue::Missing), Some(&1));

    t.set_filter("name", Some(FilterValue::contains("an"))).unwrap();
    // Brandon Hasko (2), Andrew Stocklin (4), Eric Brigandi (16)
    let tags = t.faceted_values("currentTag");
    assert_eq!(tags.len(), 3);
    assert_eq!(tags.get(&CellValue::Int(4)), Some(&1));
    assert!(tags.get(&CellValue::Int(6)).is_none());

    // Names honor the tag filter.
    let names = t.faceted_values("name");
    assert_eq!(names.len(), 1);
    assert_eq!(names.get(&CellValue::from("Ben Riesenbach")), Some(&1));
}

#[test]
fn test_page_size_change_preserves_first_visible_row() {
    let mut t = engine(numbered_rows(60));
    t.set_page(4).unwrap(); // first visible: position 41
    assert_eq!(t.visible_rows()[0].id, 41);
    t.set_page_size(20).unwrap();
    assert_eq!(t.state().pagination.page_index, 2);
    let visible: Vec<u32> = t.visible_rows().iter().map(|r| r.id).collect();
    assert!(visible.contains(&41));
    assert!(t.set_page_size(0).is_err());
}

#[test]
fn test_initial_sort_seeded_from_options() {
    let options = TableOptions::new(3)
        .unwrap()
        .with_initial_sort(Some(SortState::new("position", SortDirection::Desc)));
    let mut t = TableEngine::new(sample_rows(), columns(), options);
    let positions: Vec<u32> = t.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(positions, vec![6, 5, 4]);

    t.set_sort("position").unwrap();
    assert!(t.state().sort.is_none());
    t.reset().unwrap();
    assert_eq!(
        t.state().sort,
        Some(SortState::new("position", SortDirection::Desc))
    );
}

#[test]
fn test_replace_records_keeps_state_and_reclamps_page() {
    let mut t = engine(numbered_rows(35));
    t.set_sort("points").unwrap();
    t.set_page(3).unwrap();
    t.replace_records(numbered_rows(12));
    assert_eq!(t.state().pagination.page_index, 1);
    assert!(t.state().sort.is_some());
    assert_eq!(t.visible_rows().len(), 2);
}

#[test]
fn test_replace_records_matches_reducer_clamp() {
    let mut t = engine(numbered_rows(35));
    t.set_page(2).unwrap();

    // A page that still exists is kept as is.
    t.replace_records(numbered_rows(30));
    assert_eq!(t.state().pagination.page_index, 2);

    let expected = reduce(
        t.state(),
        &TableAction::SetPage { page_index: 2 },
        &TransitionContext {
            columns: t.columns(),
            filtered_count: 5,
            options: t.options(),
        },
    )
    .unwrap();
    t.replace_records(numbered_rows(5));
    assert_eq!(t.state(), &expected);
    assert_eq!(t.state().pagination.page_index, 0);
}

#[test]
fn test_row_selection_is_disabled() {
    let mut t = engine(sample_rows());
    assert!(t.select_row("p-1").is_err());
    assert!(t.state().row_selection.selected().is_empty());
}

#[test]
fn test_empty_record_set() {
    let mut t = engine(Vec::new());
    t.set_page(3).unwrap();
    assert_eq!(t.state().pagination.page_index, 0);
    assert!(t.visible_rows().is_empty());
    assert_eq!(t.page_count(), 1);
    assert!(!t.can_next_page());
}

#[test]
fn test_next_and_previous_page() {
    let mut t = engine(numbered_rows(25));
    t.next_page().unwrap();
    t.next_page().unwrap();
    t.next_page().unwrap();
    assert_eq!(t.state().pagination.page_index, 2);
    t.previous_page().unwrap();
    assert_eq!(t.state().pagination.page_index, 1);
    assert_eq!(t.sorted_rows().len(), 25);
}
