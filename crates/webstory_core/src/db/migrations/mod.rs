//! Storage schema steps for the story store.
//!
//! Not to be confused with the story *document* migrations under
//! `crate::migration`: the steps here version the layout of the local
//! database, not the documents inside it.
//!
//! # Invariants
//! - A step's 1-based position in `SCHEMA_STEPS` is its schema version;
//!   steps are append-only.
//! - `PRAGMA user_version` always reflects the number of applied steps.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Ordered store layout steps. Position is authoritative: inserting a step
/// anywhere but the end would re-run history against existing stores.
const SCHEMA_STEPS: &[&str] = &[
    include_str!("0001_init.sql"),
    include_str!("0002_story_indexes.sql"),
];

/// Returns the latest store schema version known by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.len() as u32
}

/// Brings the store layout up to date by applying pending steps atomically.
///
/// # Errors
/// - [`DbError::UnsupportedSchemaVersion`] when the store was written by a
///   newer binary than this one.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let applied: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if applied > latest_version() {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: applied,
            latest_supported: latest_version(),
        });
    }

    let pending = &SCHEMA_STEPS[applied as usize..];
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (offset, step) in pending.iter().enumerate() {
        tx.execute_batch(step)?;
        tx.pragma_update(None, "user_version", applied + offset as u32 + 1)?;
    }
    tx.commit()?;

    Ok(())
}
