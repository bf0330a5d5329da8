//! Flat-file leaderboard storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use smiletrack_common::clock::{SystemClock, WallClock};
use smiletrack_common::error::{SmiletrackError, SmiletrackResult};
use smiletrack_model::ScoreRecord;

use crate::ranking::rank_records;

/// A directory of leaderboard entries.
#[derive(Clone)]
pub struct LeaderboardStore {
    dir: PathBuf,
    clock: Arc<dyn WallClock>,
}

impl std::fmt::Debug for LeaderboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardStore")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

impl LeaderboardStore {
    /// Open a store rooted at `dir`, dating submissions with the system clock.
    ///
    /// The directory is created lazily on first submission.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(dir, Arc::new(SystemClock))
    }

    pub fn with_clock(dir: impl Into<PathBuf>, clock: Arc<dyn WallClock>) -> Self {
        Self {
            dir: dir.into(),
            clock,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record a score for today, replacing any entry by the same name today.
    pub fn submit(&self, name: &str, smile_count: u32) -> SmiletrackResult<ScoreRecord> {
        let record = ScoreRecord::new(name, smile_count, self.clock.today());
        self.write(&record)?;
        Ok(record)
    }

    /// Path an entry for `name` on `date` is stored at.
    pub fn entry_path(&self, name: &str, date: NaiveDate) -> PathBuf {
        self.dir.join(entry_file_name(name, date))
    }

    fn write(&self, record: &ScoreRecord) -> SmiletrackResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            SmiletrackError::leaderboard(format!(
                "Failed to create {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.entry_path(&record.name, record.date);
        let json = serde_json::to_string(record)?;
        std::fs::write(&path, json).map_err(|e| {
            SmiletrackError::leaderboard(format!("Failed to write {}: {e}", path.display()))
        })?;

        tracing::info!(
            name = %record.name,
            smile_count = record.smile_count,
            path = %path.display(),
            "Saved leaderboard entry"
        );
        Ok(())
    }

    /// Every readable entry, best first.
    ///
    /// Unreadable or malformed files are skipped. A missing directory is an
    /// empty leaderboard.
    pub fn list_ranked(&self) -> SmiletrackResult<Vec<ScoreRecord>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SmiletrackError::leaderboard(format!(
                    "Failed to list {}: {e}",
                    self.dir.display()
                )))
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json") && path.is_file())
            .collect();
        paths.sort();

        let records = paths
            .iter()
            .filter_map(|path| match read_record(path) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Skipping leaderboard entry: {e}");
                    None
                }
            })
            .collect();

        Ok(rank_records(records))
    }
}

fn read_record(path: &Path) -> SmiletrackResult<ScoreRecord> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// `<name>_<YYYY-MM-DD>.json`, with path separators in the name replaced.
fn entry_file_name(name: &str, date: NaiveDate) -> String {
    let stem: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{stem}_{}.json", date.format("%Y-%m-%d"))
}
