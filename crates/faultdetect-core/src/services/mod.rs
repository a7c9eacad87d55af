//! Core services.

pub mod fault_service;

pub use fault_service::FaultService;
