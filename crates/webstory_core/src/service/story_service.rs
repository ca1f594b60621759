//! Story use-case service.
//!
//! # Responsibility
//! - Create, open, save and list stories through repository persistence.
//! - Surface document load failures to the host without retrying:
//!   migration is deterministic, so retrying an unchanged document is
//!   pointless.
//!
//! # Invariants
//! - Opening a story always yields a latest-version document.
//! - Service APIs never bypass repository persistence contracts.

use crate::model::story::Story;
use crate::repo::story_repo::{
    RepoError, RepoResult, StoryId, StoryListQuery, StoryRecord, StoryRepository,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Service error for story use-cases.
#[derive(Debug)]
pub enum StoryServiceError {
    /// Target story does not exist (or is trashed).
    StoryNotFound(StoryId),
    /// Persistence or migration failure.
    Repo(RepoError),
}

impl Display for StoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StoryNotFound(id) => write!(f, "story not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StoryNotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::StoryNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper for story CRUD operations.
pub struct StoryService<R: StoryRepository> {
    repo: R,
}

impl<R: StoryRepository> StoryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates and persists a blank latest-version story.
    pub fn create_story(&self, title: impl Into<String>) -> RepoResult<(StoryId, Story)> {
        let story = Story::new(title);
        let id = Uuid::new_v4();
        self.repo.save_story(id, &story)?;
        info!("event=story_create module=service status=ok story_id={id}");
        Ok((id, story))
    }

    /// Opens a story for editing, migrating it to the latest schema.
    ///
    /// # Contract
    /// - Trashed stories are not openable; restore them first.
    pub fn open_story(&self, id: StoryId) -> Result<Story, StoryServiceError> {
        let story = self
            .repo
            .load_story(id, false)?
            .ok_or(StoryServiceError::StoryNotFound(id))?;
        info!(
            "event=story_open module=service status=ok story_id={id} version={} pages={}",
            story.version,
            story.pages.len()
        );
        Ok(story)
    }

    /// Persists the current editing state of a story.
    pub fn save_story(&self, id: StoryId, story: &Story) -> RepoResult<()> {
        self.repo.save_story(id, story)?;
        info!("event=story_save module=service status=ok story_id={id}");
        Ok(())
    }

    /// Lists story metadata, newest first.
    pub fn list_stories(&self, query: &StoryListQuery) -> RepoResult<Vec<StoryRecord>> {
        self.repo.list_stories(query)
    }

    /// Moves a story to the trash.
    pub fn trash_story(&self, id: StoryId) -> Result<(), StoryServiceError> {
        self.repo.trash_story(id)?;
        info!("event=story_trash module=service status=ok story_id={id}");
        Ok(())
    }

    /// Restores a story from the trash.
    pub fn restore_story(&self, id: StoryId) -> Result<(), StoryServiceError> {
        self.repo.restore_story(id)?;
        info!("event=story_restore module=service status=ok story_id={id}");
        Ok(())
    }
}
