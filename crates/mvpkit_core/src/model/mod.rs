//! Domain model for the task and post features.
//!
//! # Responsibility
//! - Define plain data types used by repositories, sources and services.
//! - Keep storage and transport concerns out of the model types.
//!
//! # Invariants
//! - Every task is identified by a non-empty `TaskId`.
//! - Posts are immutable payloads owned by their source.

pub mod post;
pub mod task;
