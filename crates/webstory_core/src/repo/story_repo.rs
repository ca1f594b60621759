//! Story repository contracts and SQLite implementation.
//!
//! # Invariants
//! - `load_story` is the single call site of the document migration
//!   pipeline; persisted documents may be at any historical version.
//! - Deletion is soft by default (`is_trashed`); hard delete is explicit.

use crate::db::DbError;
use crate::migration::{migrate_story, MigrationError};
use crate::model::story::Story;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a persisted story.
pub type StoryId = Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for story persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Migration(MigrationError),
    Serde(serde_json::Error),
    NotFound(StoryId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Migration(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "story not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted story data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Migration(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<MigrationError> for RepoError {
    fn from(value: MigrationError) -> Self {
        Self::Migration(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Metadata row returned by story listings; the document body stays in the
/// database until a story is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub id: StoryId,
    pub title: String,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub is_trashed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

/// Query options for listing stories.
#[derive(Debug, Clone, Default)]
pub struct StoryListQuery {
    pub include_trashed: bool,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for story CRUD operations.
pub trait StoryRepository {
    fn save_story(&self, id: StoryId, story: &Story) -> RepoResult<()>;
    fn load_story(&self, id: StoryId, include_trashed: bool) -> RepoResult<Option<Story>>;
    fn list_stories(&self, query: &StoryListQuery) -> RepoResult<Vec<StoryRecord>>;
    fn trash_story(&self, id: StoryId) -> RepoResult<()>;
    fn restore_story(&self, id: StoryId) -> RepoResult<()>;
    fn delete_story(&self, id: StoryId) -> RepoResult<()>;
}

/// SQLite-backed story repository.
pub struct SqliteStoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StoryRepository for SqliteStoryRepository<'_> {
    fn save_story(&self, id: StoryId, story: &Story) -> RepoResult<()> {
        let data = serde_json::to_string(story)?;
        let now = now_epoch_ms();

        self.conn.execute(
            "INSERT INTO stories (id, title, author, excerpt, data, is_trashed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?6)
             ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                author = excluded.author,
                excerpt = excluded.excerpt,
                data = excluded.data,
                updated_at = excluded.updated_at;",
            params![
                id.to_string(),
                story.title.as_deref().unwrap_or(""),
                story.author.as_deref(),
                story.excerpt.as_deref(),
                data,
                now,
            ],
        )?;

        Ok(())
    }

    fn load_story(&self, id: StoryId, include_trashed: bool) -> RepoResult<Option<Story>> {
        let mut statement = self.conn.prepare(
            "SELECT data FROM stories WHERE id = ?1 AND (is_trashed = 0 OR ?2);",
        )?;
        let mut rows = statement.query(params![id.to_string(), include_trashed])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let data: String = row.get(0)?;
        let doc: serde_json::Value = serde_json::from_str(&data)?;
        let story = migrate_story(doc)?;
        Ok(Some(story))
    }

    fn list_stories(&self, query: &StoryListQuery) -> RepoResult<Vec<StoryRecord>> {
        let mut sql = String::from(
            "SELECT id, title, author, excerpt, is_trashed, created_at, updated_at FROM stories",
        );
        let mut bindings: Vec<SqlValue> = Vec::new();

        if !query.include_trashed {
            sql.push_str(" WHERE is_trashed = 0");
        }
        sql.push_str(" ORDER BY updated_at DESC, id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bindings.push(SqlValue::from(i64::from(limit)));
            sql.push_str(" OFFSET ?");
            bindings.push(SqlValue::from(i64::from(query.offset)));
        }
        sql.push(';');

        let mut statement = self.conn.prepare(&sql)?;
        let mut rows = statement.query(params_from_iter(bindings))?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(record_from_row(row)?);
        }
        Ok(records)
    }

    fn trash_story(&self, id: StoryId) -> RepoResult<()> {
        self.set_trashed(id, true)
    }

    fn restore_story(&self, id: StoryId) -> RepoResult<()> {
        self.set_trashed(id, false)
    }

    fn delete_story(&self, id: StoryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM stories WHERE id = ?1;", params![id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

impl SqliteStoryRepository<'_> {
    fn set_trashed(&self, id: StoryId, trashed: bool) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE stories SET is_trashed = ?1, updated_at = ?2 WHERE id = ?3;",
            params![trashed, now_epoch_ms(), id.to_string()],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn record_from_row(row: &Row<'_>) -> RepoResult<StoryRecord> {
    let raw_id: String = row.get(0)?;
    let id = Uuid::parse_str(&raw_id)
        .map_err(|err| RepoError::InvalidData(format!("bad story id `{raw_id}`: {err}")))?;

    Ok(StoryRecord {
        id,
        title: row.get(1)?,
        author: row.get(2)?,
        excerpt: row.get(3)?,
        is_trashed: row.get::<_, i64>(4)? != 0,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
