//! Typed story document model.
//!
//! # Responsibility
//! - Define the canonical latest-version schema for story documents.
//! - Keep element polymorphism as an exhaustive sum type instead of
//!   string-keyed dispatch.
//!
//! # Invariants
//! - These types describe the latest schema only; historical shapes exist
//!   solely as raw JSON inside the migration pipeline.
//! - A document produced by `migration::migrate` deserializes into `Story`.

pub mod element;
pub mod pattern;
pub mod story;
