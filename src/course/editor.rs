// In: src/course/editor.rs

//! The course-settings editor: loads, validates and saves course metadata
//! through an external client, scoped to the caller's organization.

use serde::{Deserialize, Serialize};

use crate::course::{CourseSettings, Division, Hole, STANDARD_DIVISIONS};
use crate::error::{LeaderboardError, Notice};
use crate::identity::AuthContext;

/// A division to be created. The API assigns the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewDivision {
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisionChoice {
    /// The ten standard divisions, all active.
    Defaults,
    /// Organizer-chosen names, all active. Blank names are skipped.
    Custom(Vec<String>),
}

impl DivisionChoice {
    pub fn to_new_divisions(&self) -> Vec<NewDivision> {
        let names: Vec<String> = match self {
            DivisionChoice::Defaults => STANDARD_DIVISIONS.iter().map(|s| s.to_string()).collect(),
            DivisionChoice::Custom(names) => names
                .iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        };
        names
            .into_iter()
            .map(|name| NewDivision { name, active: true })
            .collect()
    }
}

/// Request/response operations against the course-settings API.
///
/// Implementations report transport or server failures as `UpstreamUnavailable`.
pub trait CourseSettingsClient {
    fn fetch(&self, org_code: &str) -> Result<CourseSettings, LeaderboardError>;
    fn save(&self, org_code: &str, settings: &CourseSettings) -> Result<(), LeaderboardError>;
    fn create_holes(&self, org_code: &str, count: u32) -> Result<Vec<Hole>, LeaderboardError>;
    fn create_divisions(
        &self,
        org_code: &str,
        divisions: &[NewDivision],
    ) -> Result<Vec<Division>, LeaderboardError>;
}

/// Holds the last-known-good settings and mediates every change through the client.
pub struct CourseSettingsEditor<C> {
    client: C,
    settings: CourseSettings,
}

impl<C: CourseSettingsClient> CourseSettingsEditor<C> {
    /// Starts from the blank new-course form.
    pub fn new(client: C) -> Self {
        Self {
            client,
            settings: CourseSettings::default(),
        }
    }

    pub fn settings(&self) -> &CourseSettings {
        &self.settings
    }

    pub fn load(&mut self, auth: Option<&AuthContext>) -> Result<Notice, LeaderboardError> {
        let org_code = AuthContext::require_org(auth)?;
        let settings = self.client.fetch(org_code).map_err(|err| {
            log::warn!("Failed to load course settings for {}: {}", org_code, err);
            upstream(err, "Failed to load course settings")
        })?;
        log::info!("Loaded course settings for {}", org_code);
        self.settings = settings;
        Ok(Notice::success("Course settings loaded"))
    }

    /// Validates `settings`, saves them for the caller's organization, and
    /// adopts them as the current settings on success.
    pub fn save(
        &mut self,
        auth: Option<&AuthContext>,
        settings: CourseSettings,
    ) -> Result<Notice, LeaderboardError> {
        let org_code = AuthContext::require_org(auth)?;
        settings.validate()?;
        self.client.save(org_code, &settings).map_err(|err| {
            log::warn!("Failed to save course settings for {}: {}", org_code, err);
            upstream(err, "Failed to submit the form")
        })?;
        self.settings = settings;
        Ok(Notice::success("Course settings saved successfully"))
    }

    pub fn add_holes(
        &mut self,
        auth: Option<&AuthContext>,
        count: u32,
    ) -> Result<Notice, LeaderboardError> {
        let org_code = AuthContext::require_org(auth)?;
        let holes = self
            .client
            .create_holes(org_code, count)
            .map_err(|err| upstream(err, "Failed to add holes"))?;
        self.settings.holes.extend(holes);
        Ok(Notice::success("Holes added successfully"))
    }

    pub fn add_divisions(
        &mut self,
        auth: Option<&AuthContext>,
        choice: &DivisionChoice,
    ) -> Result<Notice, LeaderboardError> {
        let org_code = AuthContext::require_org(auth)?;
        let requested = choice.to_new_divisions();
        if requested.is_empty() {
            return Err(LeaderboardError::InvalidCourseSettings(vec![
                "At least one division name is required.".to_string(),
            ]));
        }
        let divisions = self
            .client
            .create_divisions(org_code, &requested)
            .map_err(|err| upstream(err, "Failed to add divisions"))?;
        self.settings.divisions.extend(divisions);
        Ok(Notice::success("Divisions added successfully"))
    }
}

/// Normalizes client failures to `UpstreamUnavailable`, keeping auth failures as-is.
fn upstream(err: LeaderboardError, context: &str) -> LeaderboardError {
    match err {
        LeaderboardError::Unauthorized(_) | LeaderboardError::UpstreamUnavailable(_) => err,
        other => LeaderboardError::UpstreamUnavailable(format!("{}: {}", context, other)),
    }
}
