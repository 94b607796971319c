//! Aggregates over the watch log
//!
//! Pure functions of their input: no state, no randomness, same answer for
//! the same slice every time.

use chrono::Datelike;
use serde::{Serialize, Serializer};
use std::{collections::BTreeMap, fmt::Display};

use crate::models::{Rating, WatchEntry};

/// Calendar month, ordered chronologically and shown as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rating range used by the distribution chart
///
/// The four ranges partition 1..=10 with no gaps or overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingBucket {
    Low,
    Mid,
    High,
    Top,
}

impl RatingBucket {
    pub fn of(rating: Rating) -> Self {
        match rating.value() {
            0..=3 => Self::Low,
            4..=6 => Self::Mid,
            7..=8 => Self::High,
            _ => Self::Top,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "1–3",
            Self::Mid => "4–6",
            Self::High => "7–8",
            Self::Top => "9–10",
        }
    }
}

impl Display for RatingBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RatingBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Number of viewings per calendar month, oldest month first
///
/// Day of month is ignored. An empty log gives an empty map.
pub fn monthly_counts(entries: &[WatchEntry]) -> BTreeMap<YearMonth, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(YearMonth::of(entry.watch_date)).or_insert(0) += 1;
    }
    counts
}

/// Number of viewings per rating bucket
///
/// Buckets with no viewings are left out rather than reported as zero.
pub fn rating_distribution(entries: &[WatchEntry]) -> BTreeMap<RatingBucket, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(RatingBucket::of(entry.rating)).or_insert(0) += 1;
    }
    counts
}

/// Percentage of `total` that `count` makes up, rounded to one decimal place
pub fn share_percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}
