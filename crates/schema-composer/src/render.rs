use std::fmt::{self, Write};

use async_graphql_parser::{
    types::{
        ConstDirective, DirectiveDefinition, DirectiveLocation, EnumValueDefinition, FieldDefinition,
        InputValueDefinition, TypeDefinition, TypeKind,
    },
    Positioned,
};
use async_graphql_value::{ConstValue, Name};

use crate::{registry::Registry, schema::RootOperation};

/// Print the user-visible definitions of `registry` as IDL.
pub(crate) fn render(registry: &Registry) -> String {
    let mut blocks = Vec::new();

    if let Some(schema) = registry.schema.as_ref().filter(|schema| schema.origin.is_printed()) {
        let mut block = String::from("schema");
        write_directives(&mut block, &schema.directives);
        block.push_str(" {\n");

        for operation in RootOperation::ALL {
            if let Some(name) = registry.root_type(operation) {
                writeln!(block, "  {operation}: {name}").ok();
            }
        }

        block.push('}');
        blocks.push(block);
    }

    for record in registry.directives.values().filter(|record| record.origin.is_printed()) {
        blocks.push(render_directive_definition(&record.definition));
    }

    for record in registry.types.values().filter(|record| record.origin.is_printed()) {
        blocks.push(render_type(&record.definition));
    }

    let mut sdl = blocks.join("\n\n");
    sdl.push('\n');
    sdl
}

fn render_directive_definition(definition: &DirectiveDefinition) -> String {
    let mut out = String::new();
    write_description(&mut out, definition.description.as_ref(), "");

    write!(out, "directive @{}", definition.name.node).ok();
    write_arguments(&mut out, &definition.arguments);

    if definition.is_repeatable {
        out.push_str(" repeatable");
    }

    let locations = definition
        .locations
        .iter()
        .map(|location| location_name(&location.node))
        .collect::<Vec<_>>();

    write!(out, " on {}", locations.join(" | ")).ok();
    out
}

fn render_type(definition: &TypeDefinition) -> String {
    let mut out = String::new();
    write_description(&mut out, definition.description.as_ref(), "");

    let name = &definition.name.node;

    match &definition.kind {
        TypeKind::Scalar => {
            write!(out, "scalar {name}").ok();
            write_directives(&mut out, &definition.directives);
        }
        TypeKind::Object(object) => {
            write!(out, "type {name}").ok();
            write_implements(&mut out, &object.implements);
            write_directives(&mut out, &definition.directives);
            write_fields(&mut out, &object.fields);
        }
        TypeKind::Interface(interface) => {
            write!(out, "interface {name}").ok();
            write_implements(&mut out, &interface.implements);
            write_directives(&mut out, &definition.directives);
            write_fields(&mut out, &interface.fields);
        }
        TypeKind::Union(union) => {
            write!(out, "union {name}").ok();
            write_directives(&mut out, &definition.directives);

            if !union.members.is_empty() {
                let members = union.members.iter().map(|member| member.node.as_str()).collect::<Vec<_>>();
                write!(out, " = {}", members.join(" | ")).ok();
            }
        }
        TypeKind::Enum(enum_type) => {
            write!(out, "enum {name}").ok();
            write_directives(&mut out, &definition.directives);
            write_enum_values(&mut out, &enum_type.values);
        }
        TypeKind::InputObject(input) => {
            write!(out, "input {name}").ok();
            write_directives(&mut out, &definition.directives);
            write_input_fields(&mut out, &input.fields);
        }
    }

    out
}

fn write_implements(out: &mut String, implements: &[Positioned<Name>]) {
    if implements.is_empty() {
        return;
    }

    let names = implements.iter().map(|name| name.node.as_str()).collect::<Vec<_>>();
    write!(out, " implements {}", names.join(" & ")).ok();
}

fn write_fields(out: &mut String, fields: &[Positioned<FieldDefinition>]) {
    if fields.is_empty() {
        return;
    }

    out.push_str(" {\n");

    for field in fields {
        let field = &field.node;
        write_description(out, field.description.as_ref(), "  ");
        write!(out, "  {}", field.name.node).ok();
        write_arguments(out, &field.arguments);
        write!(out, ": {}", field.ty.node).ok();
        write_directives(out, &field.directives);
        out.push('\n');
    }

    out.push('}');
}

fn write_input_fields(out: &mut String, fields: &[Positioned<InputValueDefinition>]) {
    if fields.is_empty() {
        return;
    }

    out.push_str(" {\n");

    for field in fields {
        write_description(out, field.node.description.as_ref(), "  ");
        out.push_str("  ");
        write_input_value(out, &field.node);
        out.push('\n');
    }

    out.push('}');
}

fn write_enum_values(out: &mut String, values: &[Positioned<EnumValueDefinition>]) {
    if values.is_empty() {
        return;
    }

    out.push_str(" {\n");

    for value in values {
        write_description(out, value.node.description.as_ref(), "  ");
        write!(out, "  {}", value.node.value.node).ok();
        write_directives(out, &value.node.directives);
        out.push('\n');
    }

    out.push('}');
}

fn write_arguments(out: &mut String, arguments: &[Positioned<InputValueDefinition>]) {
    if arguments.is_empty() {
        return;
    }

    out.push('(');

    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }

        if let Some(description) = &argument.node.description {
            write!(out, "{} ", Quoted(&description.node)).ok();
        }

        write_input_value(out, &argument.node);
    }

    out.push(')');
}

fn write_input_value(out: &mut String, value: &InputValueDefinition) {
    write!(out, "{}: {}", value.name.node, value.ty.node).ok();

    if let Some(default) = &value.default_value {
        write!(out, " = {}", default.node).ok();
    }

    write_directives(out, &value.directives);
}

fn write_directives(out: &mut String, directives: &[Positioned<ConstDirective>]) {
    for directive in directives {
        let directive = &directive.node;
        write!(out, " @{}", directive.name.node).ok();

        if directive.arguments.is_empty() {
            continue;
        }

        let arguments = directive
            .arguments
            .iter()
            .map(|(name, value)| format!("{}: {}", name.node, value.node))
            .collect::<Vec<_>>();

        write!(out, "({})", arguments.join(", ")).ok();
    }
}

fn write_description(out: &mut String, description: Option<&Positioned<String>>, indent: &str) {
    if let Some(description) = description {
        writeln!(out, "{indent}{}", Quoted(&description.node)).ok();
    }
}

/// A GraphQL string literal.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ConstValue::String(self.0.to_owned()), f)
    }
}

#[allow(unreachable_patterns)]
pub(crate) fn location_name(location: &DirectiveLocation) -> &'static str {
    match location {
        DirectiveLocation::Query => "QUERY",
        DirectiveLocation::Mutation => "MUTATION",
        DirectiveLocation::Subscription => "SUBSCRIPTION",
        DirectiveLocation::Field => "FIELD",
        DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
        DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
        DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
        DirectiveLocation::Schema => "SCHEMA",
        DirectiveLocation::Scalar => "SCALAR",
        DirectiveLocation::Object => "OBJECT",
        DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
        DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
        DirectiveLocation::Interface => "INTERFACE",
        DirectiveLocation::Union => "UNION",
        DirectiveLocation::Enum => "ENUM",
        DirectiveLocation::EnumValue => "ENUM_VALUE",
        DirectiveLocation::InputObject => "INPUT_OBJECT",
        DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        _ => "VARIABLE_DEFINITION",
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::compose;

    #[test]
    fn auxiliary_definitions_are_not_printed() {
        let schema = compose(
            indoc! {r#"
                type Query {
                  name: String @fake(type: firstName)
                }
            "#},
            None,
        )
        .unwrap();

        insta::assert_snapshot!(schema.sdl(), @r###"
        type Query {
          name: String @fake(type: firstName)
        }
        "###);
    }

    #[test]
    fn extensions_are_folded_into_their_types() {
        let schema = compose(
            indoc! {r#"
                "A person"
                type User { id: ID! }
                extend type User { friends(first: Int = 10): [User!]! @listLength(min: 1, max: 3) }
                enum Role { ADMIN }
                extend enum Role { GUEST }
                type Query { me: User role: Role }
            "#},
            None,
        )
        .unwrap();

        insta::assert_snapshot!(schema.sdl(), @r###"
        "A person"
        type User {
          id: ID!
          friends(first: Int = 10): [User!]! @listLength(min: 1, max: 3)
        }

        enum Role {
          ADMIN
          GUEST
        }

        type Query {
          me: User
          role: Role
        }
        "###);
    }

    #[test]
    fn explicit_schema_and_directive_definitions() {
        let schema = compose(
            indoc! {r#"
                directive @cached(ttl: Int = 60) repeatable on FIELD_DEFINITION | OBJECT
                schema { query: Root }
                type Root { a: String @cached }
            "#},
            None,
        )
        .unwrap();

        insta::assert_snapshot!(schema.sdl(), @r###"
        schema {
          query: Root
        }

        directive @cached(ttl: Int = 60) repeatable on FIELD_DEFINITION | OBJECT

        type Root {
          a: String @cached
        }
        "###);
    }
}
