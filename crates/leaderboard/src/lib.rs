//! SmileTrack Leaderboard
//!
//! Persists each submission as `<name>_<date>.json` in a flat directory
//! and ranks every readable entry on demand. There is no locking and no
//! index: the directory listing is the database.

pub mod ranking;
pub mod store;

pub use ranking::rank_records;
pub use store::LeaderboardStore;
