//! Persistence boundary for story documents.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `stories` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Loading always runs the document migration pipeline; callers only
//!   ever see latest-version stories.
//! - Saving serializes latest-version documents produced by the editor.

pub mod story_repo;
