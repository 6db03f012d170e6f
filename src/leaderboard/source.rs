// In: src/leaderboard/source.rs

//! The contract with the external standings source.
//!
//! How standings are fetched (HTTP, file, fixture) is the source's business;
//! the core only needs a finite, already-ranked snapshot or an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::classifier::StandingsEntry;
use crate::error::LeaderboardError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingsSnapshot {
    pub entries: Vec<StandingsEntry>,
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl StandingsSnapshot {
    pub fn new(entries: Vec<StandingsEntry>) -> Self {
        Self {
            entries,
            fetched_at: Utc::now(),
        }
    }

    /// Parses either a bare JSON array of entries or a `{ entries, fetchedAt }` object.
    ///
    /// A missing or non-integer position is reported as `InvalidEntry` for that
    /// competitor; any other shape problem is a `SerdeJson` error.
    pub fn from_json_str(json: &str) -> Result<Self, LeaderboardError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            let raw: Vec<WireEntry> = serde_json::from_value(value)?;
            return Ok(StandingsSnapshot::new(into_entries(raw)?));
        }

        let raw: WireSnapshot = serde_json::from_value(value)?;
        Ok(StandingsSnapshot {
            entries: into_entries(raw.entries)?,
            fetched_at: raw.fetched_at.unwrap_or_else(Utc::now),
        })
    }
}

//==================================================================================
// I. Wire Shapes
//==================================================================================

/// An upstream entry before its positions have been checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEntry {
    id: String,
    name: String,
    #[serde(default)]
    position: Option<Number>,
    #[serde(default)]
    previous_position: Option<Number>,
    points: f64,
    #[serde(default)]
    rounds_played: Option<u32>,
    #[serde(default)]
    average_score_per_round: Option<f64>,
    #[serde(default)]
    current_tag: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSnapshot {
    entries: Vec<WireEntry>,
    #[serde(default)]
    fetched_at: Option<DateTime<Utc>>,
}

fn into_entries(raw: Vec<WireEntry>) -> Result<Vec<StandingsEntry>, LeaderboardError> {
    raw.into_iter().map(WireEntry::into_entry).collect()
}

impl WireEntry {
    fn into_entry(self) -> Result<StandingsEntry, LeaderboardError> {
        let current_position = match &self.position {
            Some(n) => whole_position(&self.name, "position", n)?,
            None => {
                return Err(LeaderboardError::invalid_entry(
                    &self.name,
                    "position is missing",
                ))
            }
        };
        let previous_position = match &self.previous_position {
            Some(n) => Some(whole_position(&self.name, "previous position", n)?),
            None => None,
        };

        Ok(StandingsEntry {
            id: self.id,
            name: self.name,
            current_position,
            previous_position,
            points: self.points,
            rounds_played: self.rounds_played,
            average_score_per_round: self.average_score_per_round,
            current_tag: self.current_tag,
        })
    }
}

/// Accepts integers and integral floats such as `3.0`.
fn whole_position(name: &str, field: &str, n: &Number) -> Result<i64, LeaderboardError> {
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }
    match n.as_f64() {
        Some(v) if v.fract() == 0.0 && v.abs() < 9.0e15 => Ok(v as i64),
        _ => Err(LeaderboardError::invalid_entry(
            name,
            format!("{} must be a whole number, got {}", field, n),
        )),
    }
}

/// Supplies standings snapshots on demand.
pub trait StandingsSource {
    /// Failures should be reported as `UpstreamUnavailable` (or `Unauthorized`).
    fn fetch(&self) -> Result<StandingsSnapshot, LeaderboardError>;
}

impl<F> StandingsSource for F
where
    F: Fn() -> Result<StandingsSnapshot, LeaderboardError>,
{
    fn fetch(&self) -> Result<StandingsSnapshot, LeaderboardError> {
        self()
    }
}

/// A source that always returns the same snapshot. Handy for fixtures and demos.
#[derive(Debug, Clone)]
pub struct StaticStandingsSource {
    snapshot: StandingsSnapshot,
}

impl StaticStandingsSource {
    pub fn new(snapshot: StandingsSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LeaderboardError> {
        Ok(Self::new(StandingsSnapshot::from_json_str(json)?))
    }
}

impl StandingsSource for StaticStandingsSource {
    fn fetch(&self) -> Result<StandingsSnapshot, LeaderboardError> {
        Ok(self.snapshot.clone())
    }
}
