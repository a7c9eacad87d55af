//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod fault_repository;
pub mod fault_service;

pub use fault_repository::{FaultRepository, FaultRepositoryError};
pub use fault_service::FaultServicePort;
