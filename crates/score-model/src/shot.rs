//! Shot records and per-run reports.

use serde::{Deserialize, Serialize};

use crate::badge::Badge;
use crate::record::SHOTS_PER_SESSION;

/// Upper bound on shots reported from a single video.
pub const MAX_SHOTS: usize = SHOTS_PER_SESSION as usize;

/// One shot window's verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// 1-based position of the shot in the session.
    pub shot_number: u32,

    /// Whether the shot went in. There is no make/miss detection, so this
    /// is always `true`.
    pub shot_made: bool,

    /// Majority smile verdict over the window's frames.
    pub smile_detected: bool,

    /// Local time-of-day the window closed (`HH:MM:SS`).
    pub timestamp: String,
}

impl ShotRecord {
    pub fn new(shot_number: u32, smile_detected: bool, timestamp: impl Into<String>) -> Self {
        Self {
            shot_number,
            shot_made: true,
            smile_detected,
            timestamp: timestamp.into(),
        }
    }
}

/// The outcome of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    shots: Vec<ShotRecord>,
}

impl ShotReport {
    /// Build a report, keeping at most [`MAX_SHOTS`] shots.
    pub fn new(mut shots: Vec<ShotRecord>) -> Self {
        shots.truncate(MAX_SHOTS);
        Self { shots }
    }

    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Number of shots judged as smiling.
    pub fn smile_count(&self) -> u32 {
        self.shots.iter().filter(|s| s.smile_detected).count() as u32
    }

    pub fn first(&self) -> Option<&ShotRecord> {
        self.shots.first()
    }

    pub fn last(&self) -> Option<&ShotRecord> {
        self.shots.last()
    }

    /// Badges earned by this run.
    pub fn badges(&self) -> Vec<Badge> {
        Badge::award(self)
    }

    /// `"12/30"` style summary.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.smile_count(), SHOTS_PER_SESSION)
    }
}
