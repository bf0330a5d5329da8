//! Show the effective configuration.

use std::path::PathBuf;

use smiletrack_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(config_file_path);
    let source = if path.exists() { "file" } else { "defaults" };

    println!("Config: {} ({source})", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}
