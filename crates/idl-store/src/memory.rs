use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{IdlStore, SchemaName, StoreError};

/// Documents kept in memory only, lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryIdlStore {
    documents: RwLock<HashMap<SchemaName, String>>,
}

impl InMemoryIdlStore {
    pub fn with_document(self, name: SchemaName, idl: impl Into<String>) -> Self {
        let mut documents = self.documents.into_inner();
        documents.insert(name, idl.into());

        Self {
            documents: RwLock::new(documents),
        }
    }
}

#[async_trait::async_trait]
impl IdlStore for InMemoryIdlStore {
    async fn read(&self, name: &SchemaName) -> Result<String, StoreError> {
        self.documents
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.clone()))
    }

    async fn write(&self, name: &SchemaName, idl: &str) -> Result<(), StoreError> {
        self.documents.write().await.insert(name.clone(), idl.to_owned());

        Ok(())
    }
}
