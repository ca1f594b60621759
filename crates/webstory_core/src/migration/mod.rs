//! Story schema migration runner.
//!
//! # Responsibility
//! - Upgrade persisted story documents from any historical schema version
//!   to the latest registered version.
//! - Surface registry gaps loudly instead of silently skipping versions.
//!
//! # Invariants
//! - Transforms are applied in strictly ascending version order, each
//!   exactly once.
//! - The root `version` field is stamped after every applied transform.
//! - A document already at (or beyond) the latest version passes through
//!   unchanged.
//!
//! # See also
//! - docs/architecture/story-schema.md

pub(crate) mod helpers;
pub mod migrations;

use crate::model::story::Story;
use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type MigrationResult<T> = Result<T, MigrationError>;

#[derive(Debug)]
pub enum MigrationError {
    /// The registry has no transform for a version the document requires.
    /// This is a programming error: the registry must be contiguous.
    MissingMigration { version: u32 },
    /// The fully migrated document does not match the latest typed schema.
    Deserialize(serde_json::Error),
}

impl Display for MigrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMigration { version } => {
                write!(f, "no migration registered for schema version {version}")
            }
            Self::Deserialize(err) => write!(f, "migrated document is not a valid story: {err}"),
        }
    }
}

impl Error for MigrationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingMigration { .. } => None,
            Self::Deserialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for MigrationError {
    fn from(value: serde_json::Error) -> Self {
        Self::Deserialize(value)
    }
}

/// Reads the declared schema version of a raw story document.
///
/// Documents without a usable integer `version` (including the legacy
/// root-array format) are treated as version 0, so every transform applies.
pub fn detect_version(doc: &Value) -> u32 {
    doc.get("version")
        .and_then(Value::as_u64)
        .map_or(0, |version| version as u32)
}

/// Applies every transform from `current_version + 1` up to the latest
/// registered version, in strictly ascending order.
///
/// Transforms assume well-formed input at their own previous version and do
/// not validate; malformed documents produce undefined output rather than
/// an error. There is no rollback: the caller owns the only copy of the
/// tree and the persisted original is untouched until an explicit save.
///
/// # Errors
/// - [`MigrationError::MissingMigration`] when the registry has a gap for a
///   required version.
pub fn migrate(mut doc: Value, current_version: u32) -> MigrationResult<Value> {
    let latest = migrations::latest_version();

    if current_version >= latest {
        if current_version > latest {
            warn!(
                "event=story_migrate module=migration status=skip reason=document_newer \
                 from_version={current_version} latest={latest}"
            );
        }
        return Ok(doc);
    }

    let started_at = Instant::now();
    info!(
        "event=story_migrate module=migration status=start from_version={current_version} \
         to_version={latest}"
    );

    let mut expected = current_version + 1;
    for migration in migrations::MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }
        if migration.version != expected {
            error!(
                "event=story_migrate module=migration status=error \
                 error_code=missing_migration version={expected}"
            );
            return Err(MigrationError::MissingMigration { version: expected });
        }

        doc = (migration.transform)(doc);
        if let Some(root) = doc.as_object_mut() {
            root.insert("version".to_string(), Value::from(migration.version));
        }
        expected = migration.version + 1;
    }

    info!(
        "event=story_migrate module=migration status=ok from_version={current_version} \
         to_version={latest} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(doc)
}

/// Detects the document version, migrates to latest and deserializes into
/// the typed story model.
///
/// # Errors
/// - [`MigrationError::MissingMigration`] on a registry gap.
/// - [`MigrationError::Deserialize`] when the migrated tree does not
///   conform to the latest schema.
pub fn migrate_story(doc: Value) -> MigrationResult<Story> {
    let current_version = detect_version(&doc);
    let migrated = migrate(doc, current_version)?;
    let story = serde_json::from_value(migrated)?;
    Ok(story)
}

#[cfg(test)]
mod tests {
    use super::{detect_version, migrate, migrations};
    use serde_json::json;

    #[test]
    fn detect_version_reads_root_integer() {
        assert_eq!(detect_version(&json!({"version": 23, "pages": []})), 23);
    }

    #[test]
    fn detect_version_defaults_to_zero() {
        assert_eq!(detect_version(&json!({"pages": []})), 0);
        assert_eq!(detect_version(&json!([])), 0);
        assert_eq!(detect_version(&json!({"version": "new"})), 0);
    }

    #[test]
    fn document_at_latest_version_is_returned_unchanged() {
        let doc = json!({"version": migrations::latest_version(), "pages": [{"id": "p1", "elements": []}]});
        let migrated = migrate(doc.clone(), migrations::latest_version()).expect("identity");
        assert_eq!(migrated, doc);
    }

    #[test]
    fn document_from_the_future_is_returned_unchanged() {
        let doc = json!({"version": 999, "pages": []});
        let migrated = migrate(doc.clone(), 999).expect("identity for newer documents");
        assert_eq!(migrated, doc);
    }
}
