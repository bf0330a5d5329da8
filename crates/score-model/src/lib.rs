//! SmileTrack Data Model
//!
//! Defines the data contracts shared by the leaderboard and the scorer:
//! - **ScoreRecord:** One persisted leaderboard entry
//! - **ShotRecord:** One reported shot window from a video analysis run
//! - **ShotReport / Badge:** The per-run summary and its cosmetic badges
//!
//! The two halves never reference each other.

pub mod badge;
pub mod record;
pub mod shot;

pub use badge::*;
pub use record::*;
pub use shot::*;
