use std::collections::HashSet;

use async_graphql_parser::types::InputObjectType;

use super::*;

pub(crate) fn validate_input_object(
    type_name: &str,
    definition: &TypeDefinition,
    input_object: &InputObjectType,
    ctx: &mut Context<'_>,
) {
    directives::validate_directives(&definition.directives, DirectiveLocation::InputObject, ctx);

    if input_object.fields.is_empty() {
        ctx.push_error(format!("Input Object type {type_name} must define one or more fields."));
    }

    for field in &input_object.fields {
        let field_name = field.node.name.node.as_str();

        ctx.validate_name(field_name);
        directives::validate_directives(&field.node.directives, DirectiveLocation::InputFieldDefinition, ctx);
        validate_input_type(&format!("{type_name}.{field_name}"), &field.node.ty.node, ctx);
    }

    ctx.find_duplicates(
        input_object.fields.iter().map(|field| field.node.name.node.as_str()),
        |ctx, name| ctx.push_error(format!("Field \"{type_name}.{name}\" can only be defined once.")),
    );

    input_object_cycles(type_name, input_object, ctx);
}

/// An input object cannot be built if it contains itself through non-null, non-list fields.
fn input_object_cycles(type_name: &str, input_object: &InputObjectType, ctx: &mut Context<'_>) {
    let mut visited = HashSet::new();
    let mut path = Vec::new();

    if find_cycle(type_name, input_object, &mut visited, &mut path, ctx.registry) {
        ctx.push_error(format!(
            "Cannot reference Input Object \"{type_name}\" within itself through a series of non-null fields: \"{}\".",
            path.join(".")
        ));
    }
}

fn find_cycle<'a>(
    origin: &str,
    input_object: &'a InputObjectType,
    visited: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
    registry: &'a Registry,
) -> bool {
    for field in &input_object.fields {
        let ty = &field.node.ty.node;

        let BaseType::Named(field_type) = &ty.base else { continue };

        if ty.nullable {
            continue;
        }

        path.push(field.node.name.node.as_str());

        if field_type == origin {
            return true;
        }

        if visited.insert(field_type.as_str()) {
            if let Some(TypeKind::InputObject(nested)) = registry.get_type(field_type).map(|definition| &definition.kind) {
                if find_cycle(origin, nested, visited, path, registry) {
                    return true;
                }
            }
        }

        path.pop();
    }

    false
}
