//! Show the ranked leaderboard.

use std::path::PathBuf;

use smiletrack_leaderboard::LeaderboardStore;
use smiletrack_model::ScoreRecord;

pub fn run(dir: PathBuf) -> anyhow::Result<()> {
    let store = LeaderboardStore::new(dir);
    let records = store
        .list_ranked()
        .map_err(|e| anyhow::anyhow!("Failed to load leaderboard: {e}"))?;

    println!("🏆 SmileTrack Family Leaderboard");
    println!();

    if records.is_empty() {
        println!("No scores submitted yet. Be the first to track your smiling shots!");
        return Ok(());
    }

    println!("🏅 Current Rankings");
    print!("{}", render_table(&records));

    Ok(())
}

fn render_table(records: &[ScoreRecord]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!(
        "{:>4}  {:<name_width$}  {:>6}  {}\n",
        "Rank", "Name", "Smiles", "Date"
    );
    out.push_str(&format!("{}\n", "-".repeat(4 + 2 + name_width + 2 + 6 + 2 + 10)));
    for (i, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>6}  {}\n",
            i + 1,
            r.name,
            r.smile_count,
            r.date
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_in_given_order() {
        let date = "2025-02-01".parse().unwrap();
        let table = render_table(&[
            ScoreRecord::new("Bob", 28, date),
            ScoreRecord::new("Alice", 25, date),
        ]);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("Bob") && lines[2].trim_start().starts_with('1'));
        assert!(lines[3].contains("Alice") && lines[3].contains("2025-02-01"));
    }
}
