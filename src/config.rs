// In: src/config.rs

//! The single source of truth for leaderboard configuration.
//!
//! `LeaderboardConfig` is created once at the application boundary (e.g. from
//! a JSON file shipped with the deployment) and then handed to the views that
//! need it. Every field has a serde default, so an empty object `{}` is a
//! valid configuration.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;
use crate::table::{SortDirection, SortState, TableOptions, DEFAULT_PAGE_SIZE};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LeaderboardConfig {
    /// Ranks up to and including this position classify as qualifiers.
    #[serde(default = "default_qualifier_count")]
    pub qualifier_count: usize,

    /// Rows per page in the standings table.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// If set, the table mounts sorted on `initial_sort_column` in this direction.
    #[serde(default)]
    pub initial_sort: Option<SortDirection>,

    #[serde(default = "default_initial_sort_column")]
    pub initial_sort_column: String,

    /// The column the toolbar's search box filters on.
    #[serde(default = "default_search_column")]
    pub search_column: String,

    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl LeaderboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, LeaderboardError> {
        let config: LeaderboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LeaderboardError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), LeaderboardError> {
        if self.page_size == 0 {
            return Err(LeaderboardError::InvalidConfig(
                "page_size must be greater than zero".to_string(),
            ));
        }
        if self.initial_sort_column.is_empty() {
            return Err(LeaderboardError::InvalidConfig(
                "initial_sort_column must not be empty".to_string(),
            ));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, LeaderboardError> {
        self.log_level.parse::<LevelFilter>().map_err(|_| {
            LeaderboardError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }

    /// The options a freshly mounted standings table starts from.
    pub fn table_options(&self) -> Result<TableOptions, LeaderboardError> {
        let initial_sort = self
            .initial_sort
            .map(|direction| SortState::new(self.initial_sort_column.clone(), direction));
        Ok(TableOptions::new(self.page_size)?.with_initial_sort(initial_sort))
    }
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            qualifier_count: default_qualifier_count(),
            page_size: default_page_size(),
            initial_sort: None,
            initial_sort_column: default_initial_sort_column(),
            search_column: default_search_column(),
            log_level: default_log_level(),
        }
    }
}

fn default_qualifier_count() -> usize {
    16
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_initial_sort_column() -> String {
    "position".to_string()
}

fn default_search_column() -> String {
    "name".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
