//! Fault service port definition.
//!
//! The business interface the HTTP layer depends on. Keeping it abstract
//! lets adapters substitute a double without touching the handler layer.

use async_trait::async_trait;

use crate::domain::fault::{Fault, NewFault};
use crate::ports::fault_repository::FaultRepositoryError;

/// Port for fault business operations.
///
/// One production implementation exists (`FaultService`); the operations
/// and error vocabulary mirror the repository port because the service
/// adds no domain logic beyond delegation.
#[async_trait]
pub trait FaultServicePort: Send + Sync {
    /// Record a new fault. Returns the persisted record with its assigned
    /// identifier.
    async fn create_fault(&self, fault: NewFault) -> Result<Fault, FaultRepositoryError>;

    /// Retrieve a fault record by its raw identifier string.
    async fn get_fault_by_id(&self, id: &str) -> Result<Fault, FaultRepositoryError>;
}
