//! Offline build from a saved snapshot

use std::path::Path;

use crate::{recap::build_weekly_payload, recap::config::RecapConfig, Result};

use super::common::{load_snapshot, print_summary, write_payloads, OutputOptions};

/// Rebuild payloads from a snapshot written by `get week-payload --save-snapshot`.
/// No network access.
pub fn handle_build(snapshot_path: &Path, output: &OutputOptions) -> Result<()> {
    let config = RecapConfig::load(output.config.as_deref())?;
    let snapshot = load_snapshot(snapshot_path)?;

    let payload = build_weekly_payload(&snapshot, &config);
    let paths = write_payloads(&payload, &output.out_dir, &config, true)?;

    if output.print {
        let trimmed = payload.trimmed(&config);
        println!("{}", serde_json::to_string_pretty(&trimmed)?);
    }
    print_summary(&payload, &paths);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{try_read_to_string, write_string};
    use crate::error::RecapError;
    use serde_json::json;

    #[test]
    fn test_build_from_snapshot_file() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot_path = dir.path().join("week_3_snapshot.json");
        let snapshot = json!({
            "week": 3,
            "league": { "league_id": "42", "name": "Dynasty", "season": "2025" },
            "users": [
                { "user_id": "u1", "display_name": "Kodiak" },
                { "user_id": "u2", "username": "davis218" }
            ],
            "rosters": [
                { "roster_id": 1, "owner_id": "u1", "settings": { "wins": 2, "losses": 1 } },
                { "roster_id": 2, "owner_id": "u2", "settings": { "wins": 1, "losses": 2 } }
            ],
            "matchups": [
                { "matchup_id": 1, "roster_id": 1, "points": 145.2 },
                { "matchup_id": 1, "roster_id": 2, "points": 132.8 }
            ]
        });
        write_string(&snapshot_path, &snapshot.to_string()).unwrap();

        let output = OutputOptions {
            out_dir: dir.path().join("out"),
            config: None,
            print: false,
        };
        handle_build(&snapshot_path, &output).unwrap();

        let trimmed = try_read_to_string(&output.out_dir.join("week_3_trimmed.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&trimmed).unwrap();
        assert_eq!(value["matchups"][0]["margin"], 12.4);
        assert_eq!(value["highlights"]["top_score"]["handle"], "@Kodiak");
        assert!(output.out_dir.join("latest.json").exists());
    }

    #[test]
    fn test_build_missing_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputOptions {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let result = handle_build(&dir.path().join("missing.json"), &output);
        assert!(matches!(result, Err(RecapError::Io(_))));
    }
}
