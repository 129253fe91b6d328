//! # parcelhub-database
//!
//! The ParcelHub entity store: the [`EntityStore`] contract, its PostgreSQL
//! implementation built from per-table repositories, an in-memory
//! implementation, and the [`StoreManager`] that picks one from
//! configuration.

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use manager::StoreManager;
pub use memory::MemoryEntityStore;
pub use postgres::PgEntityStore;
pub use store::EntityStore;
