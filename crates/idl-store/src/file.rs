use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{IdlStore, SchemaName, StoreError};

/// One `<name>.graphql` file per schema in a directory, created on the first write.
#[derive(Debug, Clone)]
pub struct FileIdlStore {
    dir: PathBuf,
}

impl FileIdlStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &SchemaName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

#[async_trait::async_trait]
impl IdlStore for FileIdlStore {
    async fn read(&self, name: &SchemaName) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(self.path(name)).await {
            Ok(idl) => Ok(idl),
            Err(error) if error.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(name.clone())),
            Err(error) => Err(error.into()),
        }
    }

    async fn write(&self, name: &SchemaName, idl: &str) -> Result<(), StoreError> {
        let path = self.path(name);

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, idl).await?;

        tracing::info!("schema saved to {}", path.display());

        Ok(())
    }
}
