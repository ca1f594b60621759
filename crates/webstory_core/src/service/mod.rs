//! Use-case services over the story repository.
//!
//! # Responsibility
//! - Provide stable entry points for hosting applications.
//! - Keep the service layer storage-agnostic; persistence details stay in
//!   repository implementations.

pub mod story_service;
