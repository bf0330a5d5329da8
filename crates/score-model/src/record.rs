//! Leaderboard entries.
//!
//! A [`ScoreRecord`] is what a player submits after a practice session:
//! their name, how many of their shots were smiling, and the day it
//! happened. Records are persisted one per file and ranked on read.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of shots in a full practice session.
pub const SHOTS_PER_SESSION: u32 = 30;

/// A single leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player name, stored verbatim.
    pub name: String,

    /// Smiling shots out of [`SHOTS_PER_SESSION`].
    pub smile_count: u32,

    /// Day of submission (serialized as `YYYY-MM-DD`).
    pub date: NaiveDate,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, smile_count: u32, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            smile_count,
            date,
        }
    }

    /// Leaderboard order: more smiles first, then the earlier date.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .smile_count
            .cmp(&self.smile_count)
            .then_with(|| self.date.cmp(&other.date))
    }
}
