//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `webstory_core` linkage.
//! - Migrate a story JSON file from disk for quick local inspection.

use std::process::ExitCode;

fn main() -> ExitCode {
    match std::env::args().nth(1) {
        None => {
            println!("webstory_core ping={}", webstory_core::ping());
            println!("webstory_core version={}", webstory_core::core_version());
            println!("story schema_version={}", webstory_core::latest_version());
            ExitCode::SUCCESS
        }
        Some(path) => match migrate_file(&path) {
            Ok(summary) => {
                println!("{summary}");
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("error: {message}");
                ExitCode::FAILURE
            }
        },
    }
}

fn migrate_file(path: &str) -> Result<String, String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("cannot read `{path}`: {err}"))?;
    let doc: serde_json::Value =
        serde_json::from_str(&raw).map_err(|err| format!("`{path}` is not valid JSON: {err}"))?;
    let from_version = webstory_core::detect_version(&doc);
    let story = webstory_core::migrate_story(doc)
        .map_err(|err| format!("migration failed for `{path}`: {err}"))?;
    Ok(format!(
        "migrated `{path}` from version {from_version} to {} ({} pages)",
        story.version,
        story.pages.len()
    ))
}
