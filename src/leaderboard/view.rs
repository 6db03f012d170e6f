// In: src/leaderboard/view.rs

//! The hosting controller for one mounted standings table.
//!
//! `LeaderboardView` pulls a snapshot from its source, classifies it, and
//! feeds the result into a `TableEngine`. A failed refresh never blanks the
//! table: the last-known-good view stays in place and a `Notice` is recorded
//! for the presentation host.

use chrono::{DateTime, Utc};

use crate::classifier::{classify, AnnotatedEntry};
use crate::config::LeaderboardConfig;
use crate::error::{LeaderboardError, Notice};
use crate::leaderboard::columns::standings_columns;
use crate::leaderboard::source::StandingsSource;
use crate::table::{FilterValue, TableEngine, TableOptions};

pub struct LeaderboardView<S> {
    source: S,
    config: LeaderboardConfig,
    options: TableOptions,
    table: Option<TableEngine<AnnotatedEntry>>,
    last_refreshed: Option<DateTime<Utc>>,
    last_notice: Option<Notice>,
}

impl<S: StandingsSource> LeaderboardView<S> {
    pub fn new(source: S, config: LeaderboardConfig) -> Result<Self, LeaderboardError> {
        config.validate()?;
        let options = config.table_options()?;
        Ok(Self {
            source,
            config,
            options,
            table: None,
            last_refreshed: None,
            last_notice: None,
        })
    }

    pub fn config(&self) -> &LeaderboardConfig {
        &self.config
    }

    /// `None` until the first successful refresh.
    pub fn table(&self) -> Option<&TableEngine<AnnotatedEntry>> {
        self.table.as_ref()
    }

    pub fn table_mut(&mut self) -> Option<&mut TableEngine<AnnotatedEntry>> {
        self.table.as_mut()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.last_notice = None;
    }

    /// Fetches and installs a new snapshot.
    ///
    /// On failure the previous table (if any) is left untouched, the error is
    /// recorded as a notice, and the error is returned.
    pub fn refresh(&mut self) -> Result<(), LeaderboardError> {
        let outcome = self.source.fetch().and_then(|snapshot| {
            let annotated = classify(&snapshot.entries, self.config.qualifier_count)?;
            Ok((annotated, snapshot.fetched_at))
        });

        match outcome {
            Ok((annotated, fetched_at)) => {
                log::info!(
                    "Installed standings snapshot: {} entries fetched at {}",
                    annotated.len(),
                    fetched_at
                );
                match self.table.as_mut() {
                    Some(table) => table.replace_records(annotated),
                    None => {
                        self.table = Some(TableEngine::new(
                            annotated,
                            standings_columns(),
                            self.options.clone(),
                        ))
                    }
                }
                self.last_refreshed = Some(fetched_at);
                self.last_notice = None;
                Ok(())
            }
            Err(err) => {
                log::warn!("Standings refresh failed, keeping last-known-good view: {}", err);
                self.last_notice = Some(Notice::from(&err));
                Err(err)
            }
        }
    }

    /// Filters the configured search column by substring. Empty text clears it.
    pub fn search(&mut self, text: &str) -> Result<(), LeaderboardError> {
        let column = self.config.search_column.clone();
        match self.table.as_mut() {
            Some(table) => table.set_filter(&column, Some(FilterValue::contains(text))),
            None => Ok(()),
        }
    }

    /// The row band name for `entry` (`podium-1`, `qualifier`, or empty).
    pub fn row_style(&self, entry: &AnnotatedEntry) -> String {
        entry.classification.row_class()
    }
}
