use std::{fmt, sync::Arc};

use async_graphql_parser::types::{TypeDefinition, TypeKind};

use crate::{
    registry::{Origin, Registry},
    render, CompositionError,
};

/// The three kinds of root operation a schema can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootOperation {
    /// `query`
    Query,
    /// `mutation`
    Mutation,
    /// `subscription`
    Subscription,
}

impl RootOperation {
    /// In schema definition order.
    pub const ALL: [RootOperation; 3] = [RootOperation::Query, RootOperation::Mutation, RootOperation::Subscription];

    /// The root type name used when the schema has no explicit `schema { ... }` definition.
    pub fn default_type_name(self) -> &'static str {
        match self {
            RootOperation::Query => "Query",
            RootOperation::Mutation => "Mutation",
            RootOperation::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for RootOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RootOperation::Query => "query",
            RootOperation::Mutation => "mutation",
            RootOperation::Subscription => "subscription",
        })
    }
}

/// A validated schema: the auxiliary fragment, the optional base document and the primary
/// document merged together.
///
/// Immutable and cheap to clone.
#[derive(Debug, Clone)]
pub struct ComposedSchema {
    inner: Arc<Registry>,
}

/// One named type of a [`ComposedSchema`].
#[derive(Debug, Clone, Copy)]
pub struct SchemaType<'a> {
    origin: Origin,
    definition: &'a TypeDefinition,
}

impl<'a> SchemaType<'a> {
    /// The type name.
    pub fn name(&self) -> &'a str {
        self.definition.name.node.as_str()
    }

    /// Which document the type was defined in.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The definition, with all its extensions merged in.
    pub fn definition(&self) -> &'a TypeDefinition {
        self.definition
    }
}

impl ComposedSchema {
    pub(crate) fn new(registry: Registry) -> Result<Self, CompositionError> {
        if registry.root_type(RootOperation::Query).is_none() {
            return Err(CompositionError::new("Query root type must be provided.".to_owned()));
        }

        Ok(Self {
            inner: Arc::new(registry),
        })
    }

    /// The name of the query root type.
    pub fn query_type(&self) -> &str {
        self.inner.root_type(RootOperation::Query).unwrap_or("Query")
    }

    /// The name of the mutation root type, if any.
    pub fn mutation_type(&self) -> Option<&str> {
        self.inner.root_type(RootOperation::Mutation)
    }

    /// The name of the subscription root type, if any.
    pub fn subscription_type(&self) -> Option<&str> {
        self.inner.root_type(RootOperation::Subscription)
    }

    /// Every named type, built-ins and auxiliary definitions included, in definition order.
    pub fn types(&self) -> impl Iterator<Item = SchemaType<'_>> + '_ {
        self.inner.types.values().map(|record| SchemaType {
            origin: record.origin,
            definition: &record.definition,
        })
    }

    /// Look a type up by name.
    pub fn get_type(&self, name: &str) -> Option<SchemaType<'_>> {
        self.inner.types.get(name).map(|record| SchemaType {
            origin: record.origin,
            definition: &record.definition,
        })
    }

    /// The object types a value of the abstract type `name` can have: union members, or the
    /// objects implementing an interface. Empty for any other type.
    pub fn possible_types(&self, name: &str) -> Vec<&str> {
        match self.inner.get_type(name).map(|definition| &definition.kind) {
            Some(TypeKind::Union(union)) => union.members.iter().map(|member| member.node.as_str()).collect(),
            Some(TypeKind::Interface(_)) => self
                .inner
                .types
                .values()
                .filter_map(|record| match &record.definition.kind {
                    TypeKind::Object(object) if object.implements.iter().any(|i| i.node == name) => {
                        Some(record.definition.name.node.as_str())
                    }
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The schema as IDL, without the built-ins and the auxiliary fragment. Extensions are folded
    /// into the definitions they extend.
    pub fn sdl(&self) -> String {
        render::render(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::compose;

    #[test]
    fn roots_default_to_conventional_names() {
        let schema = compose(
            indoc! {r#"
                type Query { a: Int }
                type Mutation { b: Int }
            "#},
            None,
        )
        .unwrap();

        assert_eq!(schema.query_type(), "Query");
        assert_eq!(schema.mutation_type(), Some("Mutation"));
        assert_eq!(schema.subscription_type(), None);
    }

    #[test]
    fn explicit_schema_definition_disables_default_names() {
        let schema = compose(
            indoc! {r#"
                schema { query: Root }
                type Root { a: Int }
                type Mutation { b: Int }
            "#},
            None,
        )
        .unwrap();

        assert_eq!(schema.query_type(), "Root");
        assert_eq!(schema.mutation_type(), None);
    }

    #[test]
    fn possible_types_of_interfaces_and_unions() {
        let schema = compose(
            indoc! {r#"
                interface Node { id: ID! }
                type User implements Node { id: ID! }
                type Post implements Node { id: ID! }
                type Tag { name: String }
                union Content = Post | Tag
                type Query { node: Node content: [Content] }
            "#},
            None,
        )
        .unwrap();

        assert_eq!(schema.possible_types("Node"), ["User", "Post"]);
        assert_eq!(schema.possible_types("Content"), ["Post", "Tag"]);
        assert!(schema.possible_types("Tag").is_empty());
    }
}
