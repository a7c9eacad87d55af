//! Fault service - thin orchestrator for fault operations.
//!
//! This service presents a storage-agnostic business interface and
//! delegates all persistence to the `FaultRepository` port. It currently
//! adds no domain logic beyond delegation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::fault::{Fault, NewFault};
use crate::ports::fault_repository::{FaultRepository, FaultRepositoryError};
use crate::ports::fault_service::FaultServicePort;

/// Production implementation of the fault service port.
pub struct FaultService {
    repo: Arc<dyn FaultRepository>,
}

impl FaultService {
    /// Create a new fault service.
    pub fn new(repo: Arc<dyn FaultRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl FaultServicePort for FaultService {
    async fn create_fault(&self, fault: NewFault) -> Result<Fault, FaultRepositoryError> {
        self.repo.insert(fault).await
    }

    async fn get_fault_by_id(&self, id: &str) -> Result<Fault, FaultRepositoryError> {
        self.repo.find_by_id(id).await
    }
}
