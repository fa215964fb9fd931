pub mod location;
pub mod memory_repository;
pub mod seed;
pub mod session;
