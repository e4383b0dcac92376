//! # registry-storage
//!
//! Record storage for the package registry.
//!
//! Packages and users live in one flat, ordered key space. Each record kind
//! owns a key prefix (see [`keys`]), records are encoded with bincode (see
//! [`codec`]) and the engine behind it is pluggable through the [`Storage`]
//! trait: RocksDB in production, an in-memory map in tests.

#![warn(clippy::all)]

pub mod codec;
pub mod errors;
pub mod keys;
pub mod memory;
pub mod records;
pub mod rocksdb_impl;
pub mod store;
pub mod traits;

pub use errors::{Result, StorageError};
pub use keys::{Namespace, PACKAGES, USERS};
pub use memory::MemoryStorage;
pub use records::{Package, Record, User};
pub use rocksdb_impl::RocksDbStorage;
pub use store::RegistryStore;
pub use traits::Storage;
