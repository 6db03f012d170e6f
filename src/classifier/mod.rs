// In: src/classifier/mod.rs

//! The leaderboard row classifier.
//!
//! Given one standings snapshot, annotate every entry with how far it moved
//! since the previous snapshot and which band (podium, qualifier, none) it
//! falls in. The classifier is pure and order-preserving: it never re-sorts.
//!
//! Ties in `current_position` are not modeled. A snapshot with duplicate
//! positions is classified entry by entry as given and a warning is logged;
//! nothing is re-ranked.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LeaderboardError;

/// Ranks 1..=PODIUM_PLACES always classify as podium.
pub const PODIUM_PLACES: i64 = 3;

//==================================================================================
// I. Input & Output Records
//==================================================================================

/// One competitor line as supplied by the standings source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingsEntry {
    /// Stable row identity. Display names are not unique.
    pub id: String,
    pub name: String,
    #[serde(rename = "position")]
    pub current_position: i64,
    /// Absent for a competitor's first appearance.
    #[serde(default)]
    pub previous_position: Option<i64>,
    pub points: f64,
    #[serde(default)]
    pub rounds_played: Option<u32>,
    #[serde(default)]
    pub average_score_per_round: Option<f64>,
    #[serde(default)]
    pub current_tag: Option<u32>,
}

impl StandingsEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, current_position: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_position,
            previous_position: None,
            points: 0.0,
            rounds_played: None,
            average_score_per_round: None,
            current_tag: None,
        }
    }

    pub fn with_previous(mut self, previous_position: i64) -> Self {
        self.previous_position = Some(previous_position);
        self
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.current_tag = Some(tag);
        self
    }

    fn validate(&self) -> Result<(), LeaderboardError> {
        if self.current_position < 1 {
            return Err(LeaderboardError::invalid_entry(
                &self.name,
                format!("current position must be >= 1, got {}", self.current_position),
            ));
        }
        if let Some(previous) = self.previous_position {
            if previous < 1 {
                return Err(LeaderboardError::invalid_entry(
                    &self.name,
                    format!("previous position must be >= 1, got {}", previous),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    Up,
    Down,
    Steady,
    /// No previous position to compare against.
    Unranked,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Movement::Up => "up",
            Movement::Down => "down",
            Movement::Steady => "steady",
            Movement::Unranked => "unranked",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(tag = "band", content = "place", rename_all = "snake_case")]
pub enum Classification {
    /// Fixed top three. Carries the place (1, 2 or 3).
    Podium(u8),
    Qualifier,
    None,
}

impl Classification {
    /// The row band name a presentation host styles against.
    pub fn row_class(&self) -> String {
        match self {
            Classification::Podium(place) => format!("podium-{}", place),
            Classification::Qualifier => "qualifier".to_string(),
            Classification::None => String::new(),
        }
    }

    pub fn is_podium(&self) -> bool {
        matches!(self, Classification::Podium(_))
    }
}

/// A standings entry plus the classifier's annotations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedEntry {
    #[serde(flatten)]
    pub entry: StandingsEntry,
    pub movement: Movement,
    pub movement_magnitude: u64,
    pub classification: Classification,
}

//==================================================================================
// II. Classification
//==================================================================================

/// Annotates `entries` in input order.
///
/// Any malformed entry aborts the whole batch with `InvalidEntry`.
pub fn classify(
    entries: &[StandingsEntry],
    qualifier_count: usize,
) -> Result<Vec<AnnotatedEntry>, LeaderboardError> {
    for entry in entries {
        entry.validate()?;
    }
    warn_on_ties(entries);

    let annotated: Vec<AnnotatedEntry> = entries
        .iter()
        .map(|entry| {
            let (movement, movement_magnitude) = movement_of(entry);
            AnnotatedEntry {
                entry: entry.clone(),
                movement,
                movement_magnitude,
                classification: classification_of(entry.current_position, qualifier_count),
            }
        })
        .collect();

    log_metric!(
        "event" = "classify",
        "entries" = annotated.len(),
        "qualifier_count" = qualifier_count
    );
    Ok(annotated)
}

fn movement_of(entry: &StandingsEntry) -> (Movement, u64) {
    let current = entry.current_position;
    match entry.previous_position {
        None => (Movement::Unranked, 0),
        // Moved toward rank 1.
        Some(previous) if previous > current => (Movement::Up, previous.abs_diff(current)),
        Some(previous) if previous < current => (Movement::Down, previous.abs_diff(current)),
        Some(_) => (Movement::Steady, 0),
    }
}

/// Podium wins over qualifier; podium places are a subset of the qualifying
/// range when `qualifier_count >= 3`.
pub fn classification_of(current_position: i64, qualifier_count: usize) -> Classification {
    if (1..=PODIUM_PLACES).contains(&current_position) {
        return Classification::Podium(current_position as u8);
    }
    match usize::try_from(current_position) {
        Ok(pos) if pos <= qualifier_count => Classification::Qualifier,
        _ => Classification::None,
    }
}

fn warn_on_ties(entries: &[StandingsEntry]) {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.current_position) {
            log::warn!(
                "Duplicate position {} in standings snapshot ('{}'); ties are not resolved",
                entry.current_position,
                entry.name
            );
        }
    }
}

#[cfg(test)]
mod tests;
