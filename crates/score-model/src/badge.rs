//! Cosmetic badges handed out after an analysis run.
//!
//! Badges are pure thresholding over the finished report: one tier badge
//! chosen by smile count, plus an optional "quick reset" when a session
//! that started without a smile ended with one.

use serde::{Deserialize, Serialize};

use crate::record::SHOTS_PER_SESSION;
use crate::shot::ShotReport;

/// Smile count needed for the consistency tier.
pub const CONSISTENCY_THRESHOLD: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    /// Every one of the 30 shots was smiling.
    PerfectPositivity,
    /// 20 or more smiling shots.
    ConsistencyStar,
    /// Lowest tier: encouragement only.
    KeepSmiling,
    /// First shot without a smile, last shot with one.
    QuickReset,
}

/// How a badge should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Info,
    Warning,
}

impl Badge {
    /// Tier badge for a smile count.
    pub fn tier(smile_count: u32) -> Self {
        if smile_count >= SHOTS_PER_SESSION {
            Badge::PerfectPositivity
        } else if smile_count >= CONSISTENCY_THRESHOLD {
            Badge::ConsistencyStar
        } else {
            Badge::KeepSmiling
        }
    }

    /// All badges earned by a report; the tier badge always comes first.
    pub fn award(report: &ShotReport) -> Vec<Badge> {
        let mut badges = vec![Badge::tier(report.smile_count())];

        if let (Some(first), Some(last)) = (report.first(), report.last()) {
            if !first.smile_detected && last.smile_detected {
                badges.push(Badge::QuickReset);
            }
        }

        badges
    }

    pub fn message(&self) -> &'static str {
        match self {
            Badge::PerfectPositivity => "🏅 30 Joys – Perfect positivity!",
            Badge::ConsistencyStar => "🏅 Consistency Star – 20+ smiles",
            Badge::KeepSmiling => "😊 Keep smiling through your shots!",
            Badge::QuickReset => "🏅 Quick Reset – You turned it around!",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Badge::PerfectPositivity | Badge::QuickReset => BadgeTone::Success,
            Badge::ConsistencyStar => BadgeTone::Info,
            Badge::KeepSmiling => BadgeTone::Warning,
        }
    }
}
