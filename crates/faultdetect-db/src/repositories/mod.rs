//! Repository implementations backed by `SQLite`.

pub mod sqlite_fault_repository;

pub use sqlite_fault_repository::SqliteFaultRepository;
