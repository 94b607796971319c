use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Rating;
use crate::error::{AppError, AppResult};

/// Storage format of `watch_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One persisted viewing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchEntry {
    /// Assigned by the store, never reused
    pub id: i64,
    pub movie_title: String,
    pub watch_date: NaiveDate,
    pub rating: Rating,
    pub notes: String,
}

/// A viewing that passed validation and is ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewWatchEntry {
    movie_title: String,
    watch_date: NaiveDate,
    rating: Rating,
    notes: String,
}

impl NewWatchEntry {
    /// Builds a new entry, rejecting a blank title
    pub fn new(
        movie_title: impl Into<String>,
        watch_date: NaiveDate,
        rating: Rating,
        notes: impl Into<String>,
    ) -> AppResult<Self> {
        let movie_title = movie_title.into();
        if movie_title.trim().is_empty() {
            return Err(AppError::validation("movie title must not be empty"));
        }

        Ok(Self {
            movie_title,
            watch_date,
            rating,
            notes: notes.into(),
        })
    }

    pub fn movie_title(&self) -> &str {
        &self.movie_title
    }

    pub fn watch_date(&self) -> NaiveDate {
        self.watch_date
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Attaches the store-assigned id
    pub fn with_id(self, id: i64) -> WatchEntry {
        WatchEntry {
            id,
            movie_title: self.movie_title,
            watch_date: self.watch_date,
            rating: self.rating,
            notes: self.notes,
        }
    }
}

/// Parses a calendar date in strict `YYYY-MM-DD` form
///
/// chrono's parser also takes single-digit fields and a signed year, so the
/// result must format back to exactly the input.
pub fn parse_watch_date(raw: &str) -> AppResult<NaiveDate> {
    let trimmed = raw.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| AppError::validation(format!("invalid watch date '{}': {}", raw, e)))?;

    if date.format(DATE_FORMAT).to_string() != trimmed {
        return Err(AppError::validation(format!(
            "invalid watch date '{}': expected YYYY-MM-DD",
            raw
        )));
    }

    Ok(date)
}
