use async_graphql_parser::parse_schema;

use crate::{
    diagnostics::Diagnostics,
    registry::{Origin, Registry},
    validate, CompositionError,
};

/// IDL of the directives and helper types understood by the fake data resolvers.
pub const FAKE_DEFINITION: &str = include_str!("fake_definition.graphql");

const BUILTINS: &str = include_str!("builtins.graphql");

/// A fixed IDL fragment merged into every composed schema.
///
/// Its definitions are available to every document, but they are never printed back as part of
/// the user's schema.
#[derive(Debug, Clone)]
pub struct AuxiliaryFragment {
    registry: Registry,
}

impl AuxiliaryFragment {
    /// Parse and validate a fragment. It can only refer to its own definitions and to the
    /// built-in scalars and directives.
    pub fn parse(source: &str) -> Result<Self, CompositionError> {
        let document = parse_schema(source).map_err(CompositionError::from_syntax)?;

        let mut registry = builtins();
        let mut diagnostics = Diagnostics::default();
        registry.ingest(document, Origin::Auxiliary, &mut diagnostics);

        if diagnostics.is_empty() {
            validate::validate_definitions(&registry, &mut diagnostics);
        }

        diagnostics.into_result()?;

        Ok(Self { registry })
    }

    /// The `@fake`, `@listLength` and `@examples` directives with their helper types.
    pub fn faker() -> Self {
        Self::parse(FAKE_DEFINITION).expect("the embedded faker definitions are valid")
    }

    /// No auxiliary definitions, only the built-ins.
    pub fn empty() -> Self {
        Self { registry: builtins() }
    }

    pub(crate) fn into_registry(self) -> Registry {
        self.registry
    }
}

fn builtins() -> Registry {
    let document = parse_schema(BUILTINS).expect("the built-in definitions are valid");

    let mut registry = Registry::default();
    registry.ingest(document, Origin::Builtin, &mut Diagnostics::default());

    registry
}
