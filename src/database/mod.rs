pub mod manager;
pub mod memory;
pub mod postgres;
pub mod query_builder;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryRepository;
pub use postgres::PgRepository;
pub use repository::Repository;
