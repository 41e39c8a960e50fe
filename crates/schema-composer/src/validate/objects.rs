use async_graphql_parser::types::{FieldDefinition, InterfaceType, ObjectType};

use super::*;

pub(crate) fn validate_object(
    type_name: &str,
    definition: &TypeDefinition,
    object: &ObjectType,
    ctx: &mut Context<'_>,
) {
    directives::validate_directives(&definition.directives, DirectiveLocation::Object, ctx);

    if object.fields.is_empty() {
        ctx.push_error(format!("Type {type_name} must define one or more fields."));
    }

    validate_fields(type_name, &object.fields, ctx);
    implements::validate_implements_list(type_name, &object.implements, &object.fields, ctx);
}

pub(crate) fn validate_interface(
    type_name: &str,
    definition: &TypeDefinition,
    interface: &InterfaceType,
    ctx: &mut Context<'_>,
) {
    directives::validate_directives(&definition.directives, DirectiveLocation::Interface, ctx);

    if interface.fields.is_empty() {
        ctx.push_error(format!("Interface {type_name} must define one or more fields."));
    }

    validate_fields(type_name, &interface.fields, ctx);
    implements::validate_implements_list(type_name, &interface.implements, &interface.fields, ctx);
}

fn validate_fields(type_name: &str, fields: &[Positioned<FieldDefinition>], ctx: &mut Context<'_>) {
    for field in fields {
        let field_name = field.node.name.node.as_str();
        let coordinate = format!("{type_name}.{field_name}");

        ctx.validate_name(field_name);
        directives::validate_directives(&field.node.directives, DirectiveLocation::FieldDefinition, ctx);
        validate_output_type(&coordinate, &field.node.ty.node, ctx);
        validate_arguments(&coordinate, &field.node.arguments, ctx);
    }

    ctx.find_duplicates(fields.iter().map(|field| field.node.name.node.as_str()), |ctx, name| {
        ctx.push_error(format!("Field \"{type_name}.{name}\" can only be defined once."));
    });
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use crate::compose;

    fn errors(sdl: &str) -> String {
        compose(sdl, None).unwrap_err().message().to_owned()
    }

    #[test]
    fn unknown_field_type() {
        insta::assert_snapshot!(errors("type Query { user: Foo }"), @r###"Unknown type "Foo"."###);
    }

    #[test]
    fn input_object_in_output_position() {
        let sdl = indoc! {r#"
            input Filter { name: String }
            type Query { filter: Filter }
        "#};

        insta::assert_snapshot!(errors(sdl), @"The type of Query.filter must be Output Type but got: Filter.");
    }

    #[test]
    fn object_in_argument_position() {
        let sdl = indoc! {r#"
            type User { name: String }
            type Query { users(filter: [User!]): [User] }
        "#};

        insta::assert_snapshot!(
            errors(sdl),
            @"The type of Query.users(filter:) must be Input Type but got: [User!]."
        );
    }

    #[test]
    fn duplicate_fields_and_arguments() {
        let sdl = indoc! {r#"
            type Query {
              a(x: Int, x: Int): Int
              a: String
            }
        "#};

        insta::assert_snapshot!(errors(sdl), @r###"
        Argument "Query.a(x:)" can only be defined once.
        Field "Query.a" can only be defined once.
        "###);
    }

    #[test]
    fn reserved_names() {
        insta::assert_snapshot!(
            errors("type Query { __secret: Int }"),
            @r###"Name "__secret" must not begin with "__", which is reserved by GraphQL introspection."###
        );
    }

    #[test]
    fn empty_object() {
        insta::assert_snapshot!(
            errors("type Query { a: Empty } type Empty"),
            @"Type Empty must define one or more fields."
        );
    }
}
