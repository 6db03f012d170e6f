// In: src/course/mod.rs

//! Course metadata managed by organizers: general info, layouts, holes and
//! divisions. The wire shape follows the course-settings API.
//!
//! Persistence lives behind `CourseSettingsClient`; this module only owns the
//! model, its defaults and its validation rules.

use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

pub mod editor;

pub use editor::{CourseSettingsClient, CourseSettingsEditor, DivisionChoice, NewDivision};

/// Longest allowed course short code.
pub const MAX_SHORT_CODE_LEN: usize = 5;
/// Holes created for a fresh course.
pub const DEFAULT_HOLE_COUNT: u32 = 18;
/// The standard PDGA-style divisions offered to every course.
pub const STANDARD_DIVISIONS: [&str; 10] = [
    "MPO", "FPO", "MA1", "FA1", "MA2", "FA2", "MA3", "FA3", "MA4", "FA4",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_id: Option<i64>,
    pub par: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    pub hole_id: i64,
    pub hole_number: u32,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub division_id: i64,
    pub name: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseSettings {
    pub course_name: String,
    pub short_code: String,
    pub city: String,
    pub state: String,
    pub layouts: Vec<Layout>,
    #[serde(default)]
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub divisions: Vec<Division>,
    #[serde(default, rename = "udiscLeagueURL")]
    pub udisc_league_url: Option<String>,
}

impl Default for CourseSettings {
    fn default() -> Self {
        let holes = (1..=DEFAULT_HOLE_COUNT)
            .map(|n| Hole {
                hole_id: i64::from(n),
                hole_number: n,
                active: true,
            })
            .collect();
        let divisions = STANDARD_DIVISIONS
            .iter()
            .enumerate()
            .map(|(i, name)| Division {
                division_id: i as i64 + 1,
                name: name.to_string(),
                active: matches!(*name, "MPO" | "MA1" | "MA2"),
            })
            .collect();

        Self {
            course_name: String::new(),
            short_code: String::new(),
            city: String::new(),
            state: String::new(),
            layouts: vec![Layout {
                name: String::new(),
                layout_id: Some(-1),
                par: "72".to_string(),
            }],
            holes,
            divisions,
            udisc_league_url: Some(String::new()),
        }
    }
}

impl CourseSettings {
    /// Checks every field rule and reports all violations at once.
    pub fn validate(&self) -> Result<(), LeaderboardError> {
        let mut problems = Vec::new();

        if self.course_name.trim().is_empty() {
            problems.push("Course name is required.".to_string());
        }
        if self.short_code.is_empty() {
            problems.push("Course short code is required.".to_string());
        }
        if self.short_code.chars().count() > MAX_SHORT_CODE_LEN {
            problems.push(format!(
                "Course short code must be {} characters or less.",
                MAX_SHORT_CODE_LEN
            ));
        }
        if self.short_code != self.short_code.to_uppercase() {
            problems.push("Course Short Code must be all uppercase".to_string());
        }
        if self.city.trim().is_empty() {
            problems.push("City is required.".to_string());
        }
        if self.state.trim().is_empty() {
            problems.push("State is required.".to_string());
        }
        if self.layouts.is_empty() {
            problems.push("At least one layout is required.".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(LeaderboardError::InvalidCourseSettings(problems))
        }
    }

    pub fn active_divisions(&self) -> impl Iterator<Item = &Division> {
        self.divisions.iter().filter(|d| d.active)
    }

    pub fn active_hole_count(&self) -> usize {
        self.holes.iter().filter(|h| h.active).count()
    }
}
