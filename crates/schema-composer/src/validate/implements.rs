use async_graphql_parser::types::{FieldDefinition, InterfaceType};
use async_graphql_value::Name;

use super::*;

/// The `implements` list of an object or interface, checked against the fields it declares.
pub(crate) fn validate_implements_list(
    type_name: &str,
    implements: &[Positioned<Name>],
    fields: &[Positioned<FieldDefinition>],
    ctx: &mut Context<'_>,
) {
    for implemented in implements {
        let interface_name = implemented.node.as_str();

        if interface_name == type_name {
            ctx.push_error(format!(
                "Type {type_name} cannot implement itself because it would create a circular reference."
            ));
            continue;
        }

        match ctx.get_type(interface_name).map(|definition| &definition.kind) {
            None => ctx.push_error(format!("Unknown type \"{interface_name}\".")),
            Some(TypeKind::Interface(interface)) => {
                validate_implementation(type_name, implements, fields, interface_name, interface, ctx);
            }
            Some(_) => ctx.push_error(format!(
                "Type {type_name} must only implement Interface types, it cannot implement {interface_name}."
            )),
        }
    }

    ctx.find_duplicates(implements.iter().map(|name| name.node.as_str()), |ctx, name| {
        ctx.push_error(format!("Type {type_name} can only implement {name} once."));
    });
}

fn validate_implementation(
    type_name: &str,
    implements: &[Positioned<Name>],
    fields: &[Positioned<FieldDefinition>],
    interface_name: &str,
    interface: &InterfaceType,
    ctx: &mut Context<'_>,
) {
    for transitive in &interface.implements {
        let transitive = transitive.node.as_str();

        if transitive != type_name && !implements.iter().any(|name| name.node == transitive) {
            ctx.push_error(format!(
                "Type {type_name} must implement {transitive} because it is implemented by {interface_name}."
            ));
        }
    }

    for interface_field in &interface.fields {
        let interface_field = &interface_field.node;
        let field_name = interface_field.name.node.as_str();

        let Some(field) = fields.iter().find(|field| field.node.name.node == field_name) else {
            ctx.push_error(format!(
                "Interface field {interface_name}.{field_name} expected but {type_name} does not provide it."
            ));
            continue;
        };

        let field = &field.node;

        if !is_subtype(&field.ty.node, &interface_field.ty.node, ctx) {
            ctx.push_error(format!(
                "Interface field {interface_name}.{field_name} expects type {} but {type_name}.{field_name} is type {}.",
                interface_field.ty.node, field.ty.node
            ));
        }

        for interface_argument in &interface_field.arguments {
            let interface_argument = &interface_argument.node;
            let argument_name = interface_argument.name.node.as_str();

            let Some(argument) = field
                .arguments
                .iter()
                .find(|argument| argument.node.name.node == argument_name)
            else {
                ctx.push_error(format!(
                    "Interface field argument {interface_name}.{field_name}({argument_name}:) expected but {type_name}.{field_name} does not provide it."
                ));
                continue;
            };

            if argument.node.ty.node != interface_argument.ty.node {
                ctx.push_error(format!(
                    "Interface field argument {interface_name}.{field_name}({argument_name}:) expects type {} but {type_name}.{field_name}({argument_name}:) is type {}.",
                    interface_argument.ty.node, argument.node.ty.node
                ));
            }
        }

        for argument in &field.arguments {
            let argument = &argument.node;
            let required = !argument.ty.node.nullable && argument.default_value.is_none();
            let declared = interface_field
                .arguments
                .iter()
                .any(|interface_argument| interface_argument.node.name.node == argument.name.node);

            if required && !declared {
                ctx.push_error(format!(
                    "Object field {type_name}.{field_name} includes required argument {} that is missing from the Interface field {interface_name}.{field_name}.",
                    argument.name.node
                ));
            }
        }
    }
}

/// Whether a field of type `sub` can stand in for a field of type `sup`.
fn is_subtype(sub: &Type, sup: &Type, ctx: &Context<'_>) -> bool {
    if !sup.nullable && sub.nullable {
        return false;
    }

    match (&sub.base, &sup.base) {
        (BaseType::List(sub), BaseType::List(sup)) => is_subtype(sub, sup, ctx),
        (BaseType::Named(sub), BaseType::Named(sup)) => sub == sup || is_possible_type(sup, sub, ctx),
        _ => false,
    }
}

fn is_possible_type(abstract_name: &str, object_name: &str, ctx: &Context<'_>) -> bool {
    match ctx.get_type(abstract_name).map(|definition| &definition.kind) {
        Some(TypeKind::Union(union)) => union.members.iter().any(|member| member.node == object_name),
        Some(TypeKind::Interface(_)) => match ctx.get_type(object_name).map(|definition| &definition.kind) {
            Some(TypeKind::Object(object)) => object.implements.iter().any(|name| name.node == abstract_name),
            Some(TypeKind::Interface(interface)) => {
                interface.implements.iter().any(|name| name.node == abstract_name)
            }
            _ => false,
        },
        _ => false,
    }
}
