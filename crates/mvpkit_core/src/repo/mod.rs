//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the task data access contract.
//! - Keep the storage row shape (`TaskRecord`) separate from the `Task` model.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod task_record;
pub mod task_repo;
