//! Persistence of IDL documents, one per schema name.

#![deny(unsafe_code)]

mod error;
mod file;
mod memory;
mod name;

pub use self::{error::StoreError, file::FileIdlStore, memory::InMemoryIdlStore, name::SchemaName};

/// A key/value store of IDL texts.
///
/// Reads never modify the store and a write replaces the whole document. Concurrent writes to the
/// same name race, the last one wins.
#[async_trait::async_trait]
pub trait IdlStore: Send + Sync {
    /// The IDL stored under `name`, or [`StoreError::NotFound`] when nothing was ever saved there.
    async fn read(&self, name: &SchemaName) -> Result<String, StoreError>;

    /// Replace the IDL stored under `name`.
    async fn write(&self, name: &SchemaName, idl: &str) -> Result<(), StoreError>;

    /// Store `idl` under `name` unless there is something already. Returns whether it was written.
    async fn seed(&self, name: &SchemaName, idl: &str) -> Result<bool, StoreError> {
        match self.read(name).await {
            Ok(_) => Ok(false),
            Err(StoreError::NotFound(_)) => self.write(name, idl).await.map(|()| true),
            Err(error) => Err(error),
        }
    }
}
