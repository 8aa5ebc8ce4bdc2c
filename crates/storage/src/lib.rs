#![forbid(unsafe_code)]

pub mod credentials;
pub mod repository;
pub mod sqlite;

pub use credentials::CredentialStore;
pub use repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};
