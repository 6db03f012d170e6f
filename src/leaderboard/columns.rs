// In: src/leaderboard/columns.rs

//! The standings table's column set, and how an `AnnotatedEntry` exposes
//! its fields to the table engine.

use crate::classifier::{AnnotatedEntry, Movement};
use crate::table::ColumnDescriptor;
use crate::types::{CellValue, Record, RowId};

/// Column key -> header label, used by the column-visibility picker.
pub const COLUMN_HEADERS: [(&str, &str); 6] = [
    ("position", "Position"),
    ("name", "Name"),
    ("points", "Points"),
    ("currentTag", "Current Tag"),
    ("roundsPlayed", "Rounds Played"),
    ("averageScorePerRound", "Average Score/Round"),
];

impl Record for AnnotatedEntry {
    fn row_id(&self) -> RowId {
        self.entry.id.clone()
    }

    fn value(&self, key: &str) -> CellValue {
        let e = &self.entry;
        match key {
            "position" => CellValue::Int(e.current_position),
            "previousPosition" => CellValue::from(e.previous_position),
            "name" => CellValue::from(e.name.as_str()),
            "points" => CellValue::Float(e.points),
            "currentTag" => CellValue::from(e.current_tag),
            "roundsPlayed" => CellValue::from(e.rounds_played),
            "averageScorePerRound" => CellValue::from(e.average_score_per_round),
            "movement" => CellValue::Text(self.movement.to_string()),
            "movementMagnitude" => CellValue::Int(self.movement_magnitude as i64),
            _ => CellValue::Missing,
        }
    }
}

/// Short text marker for a row's movement, e.g. `▲2`, `▼1`, `–`.
pub fn movement_indicator(entry: &AnnotatedEntry) -> String {
    match entry.movement {
        Movement::Up => format!("▲{}", entry.movement_magnitude),
        Movement::Down => format!("▼{}", entry.movement_magnitude),
        Movement::Steady => "–".to_string(),
        Movement::Unranked => String::new(),
    }
}

/// The default leaderboard columns.
pub fn standings_columns() -> Vec<ColumnDescriptor<AnnotatedEntry>> {
    vec![
        ColumnDescriptor::new("position", "Position").with_render(|value, entry| {
            let marker = movement_indicator(entry);
            if marker.is_empty() {
                value.to_string()
            } else {
                format!("{} {}", value, marker)
            }
        }),
        ColumnDescriptor::new("name", "Name").filterable(true),
        ColumnDescriptor::new("points", "Points Total"),
        ColumnDescriptor::new("currentTag", "Current Tag").filterable(true),
        ColumnDescriptor::new("roundsPlayed", "Rounds Played"),
        ColumnDescriptor::new("averageScorePerRound", "Avg Score/Round").with_render(
            |value, _| match value.as_f64() {
                Some(avg) => format!("{:.1}", avg),
                None => String::new(),
            },
        ),
    ]
}
