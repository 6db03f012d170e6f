// In: src/leaderboard/rounds.rs

//! Round-by-round results ("running scores"): who finished where in each
//! tags round, which tag they brought in and which they left with.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::table::ColumnDescriptor;
use crate::types::{CellValue, Record, RowId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_date: NaiveDate,
    pub name: String,
    pub place: u32,
    /// The tag carried into the round. Upstream sends it as a string or a number.
    #[serde(default, deserialize_with = "deserialize_tag")]
    pub tag_in: Option<u32>,
    pub tag_out: u32,
    pub points_scored: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Number(u32),
    Text(String),
}

fn deserialize_tag<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawTag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawTag::Number(n)) => Ok(Some(n)),
        Some(RawTag::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawTag::Text(s)) => s
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl Record for RoundResult {
    /// Places are unique within a round.
    fn row_id(&self) -> RowId {
        format!("{}#{}", self.round_date, self.place)
    }

    fn value(&self, key: &str) -> CellValue {
        match key {
            // ISO dates order chronologically as text.
            "roundDate" => CellValue::Text(self.round_date.format("%Y-%m-%d").to_string()),
            "name" => CellValue::from(self.name.as_str()),
            "place" => CellValue::from(self.place),
            "tagIn" => CellValue::from(self.tag_in),
            "tagOut" => CellValue::from(self.tag_out),
            "pointsScored" => CellValue::Int(self.points_scored),
            _ => CellValue::Missing,
        }
    }
}

pub fn round_results_columns() -> Vec<ColumnDescriptor<RoundResult>> {
    vec![
        ColumnDescriptor::new("roundDate", "Round Date").filterable(true),
        ColumnDescriptor::new("name", "Name").filterable(true),
        ColumnDescriptor::new("place", "Place"),
        ColumnDescriptor::new("tagIn", "Tag In").with_render(|value, _| {
            if value.is_missing() {
                "-".to_string()
            } else {
                value.to_string()
            }
        }),
        ColumnDescriptor::new("tagOut", "Tag Out"),
        ColumnDescriptor::new("pointsScored", "Points"),
    ]
}
