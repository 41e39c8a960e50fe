use crate::SchemaName;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Schema \"{0}\" not found...")]
    NotFound(SchemaName),
    #[error("Invalid schema name \"{0}\". Use letters, digits, '-', '_' and '.' only.")]
    InvalidName(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
