#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod repositories;
pub mod setup;

// Re-export the repository implementation
pub use repositories::SqliteFaultRepository;

// Re-export the pool type so adapters can hold the storage handle without
// a direct sqlx dependency
pub use sqlx::SqlitePool;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
