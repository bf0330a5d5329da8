pub mod config;
pub mod leaderboard;
pub mod score;
pub mod submit;
