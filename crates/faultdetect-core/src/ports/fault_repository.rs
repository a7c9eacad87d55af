//! Fault repository trait and error types.
//!
//! This module defines the repository abstraction for fault record
//! persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::fault::{Fault, NewFault};

/// Domain-specific errors for fault repository operations.
///
/// This error type abstracts away storage implementation details and
/// provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum FaultRepositoryError {
    /// The supplied identifier is not a well-formed fault id.
    ///
    /// Distinguished from `NotFound` so callers can log or branch
    /// differently, even where both collapse at an outer boundary.
    #[error("Invalid fault id: {0}")]
    InvalidId(String),

    /// No fault record matches the (well-formed) identifier.
    #[error("Fault not found: {0}")]
    NotFound(String),

    /// Storage backend error (connectivity, write failure, decode failure
    /// of a stored record).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository trait for fault record persistence.
///
/// Fault records are immutable once written: there is intentionally no
/// update, delete, list, or query-by-field operation on this port.
#[async_trait]
pub trait FaultRepository: Send + Sync {
    /// Insert a new fault record.
    ///
    /// The repository assigns the identifier; it is returned on the
    /// persisted record.
    ///
    /// # Errors
    ///
    /// - `Storage` for any connectivity or write failure
    async fn insert(&self, fault: NewFault) -> Result<Fault, FaultRepositoryError>;

    /// Look up a fault record by its raw identifier string.
    ///
    /// The identifier is validated before any query is issued, so a
    /// malformed id never costs a storage round-trip.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is not 24 hex characters
    /// - `NotFound` if no record matches
    /// - `Storage` for any other read failure
    async fn find_by_id(&self, id: &str) -> Result<Fault, FaultRepositoryError>;
}
