//! Composition of GraphQL IDL documents into a validated schema.
//!
//! The same [`Composer`] is used by the server when it resolves a schema for a request and by the
//! editor while the user types, so that a schema accepted in one place is accepted in the other.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod diagnostics;
mod error;
mod prelude;
mod registry;
mod render;
mod schema;
mod validate;

use std::sync::Arc;

pub use self::{
    error::CompositionError,
    prelude::{AuxiliaryFragment, FAKE_DEFINITION},
    registry::Origin,
    schema::{ComposedSchema, RootOperation, SchemaType},
};
/// The IDL syntax tree the composed schema is made of.
pub use async_graphql_parser::types as ast;
pub use async_graphql_parser::Positioned;

use self::{diagnostics::Diagnostics, registry::Registry};

/// Composes IDL documents, always merging in the same auxiliary fragment.
///
/// Cloning is cheap, the prelude (built-in scalars and directives plus the auxiliary fragment) is
/// parsed and validated once and shared.
#[derive(Clone)]
pub struct Composer {
    prelude: Arc<Registry>,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(AuxiliaryFragment::faker())
    }
}

impl Composer {
    /// A composer merging `fragment` into every composed schema.
    pub fn new(fragment: AuxiliaryFragment) -> Self {
        Self {
            prelude: Arc::new(fragment.into_registry()),
        }
    }

    /// Compose `primary` into an executable schema.
    ///
    /// Without `base`, the primary document is the whole schema. With `base`, the base document is
    /// composed first and `primary` is applied on top of it as an additive extension: new types,
    /// fields and directives are accepted, redefinitions of what the base already has are not.
    pub fn compose(&self, primary: &str, base: Option<&str>) -> Result<ComposedSchema, CompositionError> {
        let mut registry = Registry::clone(&self.prelude);

        if let Some(base) = base {
            ingest_source(&mut registry, base, Origin::Base)?;
        }

        ingest_source(&mut registry, primary, Origin::User)?;

        ComposedSchema::new(registry)
    }
}

/// Compose with the default faker fragment. See [`Composer::compose`].
pub fn compose(primary: &str, base: Option<&str>) -> Result<ComposedSchema, CompositionError> {
    Composer::default().compose(primary, base)
}

fn ingest_source(registry: &mut Registry, source: &str, origin: Origin) -> Result<(), CompositionError> {
    let document = async_graphql_parser::parse_schema(source).map_err(CompositionError::from_syntax)?;

    let mut diagnostics = Diagnostics::default();
    registry.ingest(document, origin, &mut diagnostics);

    if diagnostics.is_empty() {
        validate::validate(registry, &mut diagnostics);
    }

    diagnostics.into_result()
}
