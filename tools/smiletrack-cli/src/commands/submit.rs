//! Save a score to the leaderboard.

use std::path::PathBuf;

use smiletrack_leaderboard::LeaderboardStore;

pub fn run(dir: PathBuf, name: String, smiles: u32) -> anyhow::Result<()> {
    if name.is_empty() {
        return Err(anyhow::anyhow!("A name is required to submit a score"));
    }

    tracing::debug!(name = %name, smiles, dir = %dir.display(), "Submitting score");
    let store = LeaderboardStore::new(dir);
    let record = store
        .submit(&name, smiles)
        .map_err(|e| anyhow::anyhow!("Failed to save score: {e}"))?;

    println!(
        "Score for {} saved! ({}/30 on {})",
        record.name, record.smile_count, record.date
    );
    println!(
        "  Stored at: {}",
        store.entry_path(&record.name, record.date).display()
    );

    Ok(())
}
