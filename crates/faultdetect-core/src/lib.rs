#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Fault, FaultId, NewFault};
pub use ports::{FaultRepository, FaultRepositoryError, FaultServicePort};
pub use services::FaultService;
