pub mod error;
pub mod memory_repo;
