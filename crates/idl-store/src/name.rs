use std::{fmt, str::FromStr};

use crate::StoreError;

const DEFAULT: &str = "default";

/// The key of one IDL document.
///
/// An absent or empty name, or the literal `default`, selects the default slot. Other names are
/// restricted to ASCII letters, digits, `-`, `_` and `.` and cannot start with a `.`, so that each
/// maps to exactly one file of a flat directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SchemaName(Option<String>);

impl SchemaName {
    /// The default slot.
    pub fn default_slot() -> Self {
        Self(None)
    }

    /// A name taken from a request path, where it is optional.
    pub fn from_path(name: Option<&str>) -> Result<Self, StoreError> {
        match name {
            None => Ok(Self::default_slot()),
            Some(name) => name.parse(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.0.is_none()
    }

    /// The name, `default` for the default slot.
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or(DEFAULT)
    }

    /// The name of the file holding the document.
    pub fn file_name(&self) -> String {
        format!("{}.graphql", self.as_str())
    }
}

impl FromStr for SchemaName {
    type Err = StoreError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.is_empty() || name == DEFAULT {
            return Ok(Self::default_slot());
        }

        let valid = !name.starts_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StoreError::InvalidName(name.to_owned()));
        }

        Ok(Self(Some(name.to_owned())))
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
