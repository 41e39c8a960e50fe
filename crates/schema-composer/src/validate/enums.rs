use async_graphql_parser::types::EnumType;

use super::*;

pub(crate) fn validate_enum(type_name: &str, definition: &TypeDefinition, enum_type: &EnumType, ctx: &mut Context<'_>) {
    directives::validate_directives(&definition.directives, DirectiveLocation::Enum, ctx);

    if enum_type.values.is_empty() {
        ctx.push_error(format!("Enum type {type_name} must define one or more values."));
    }

    for value in &enum_type.values {
        let value_name = value.node.value.node.as_str();

        ctx.validate_name(value_name);

        if matches!(value_name, "true" | "false" | "null") {
            ctx.push_error(format!("Enum type {type_name} cannot include value: {value_name}."));
        }

        directives::validate_directives(&value.node.directives, DirectiveLocation::EnumValue, ctx);
    }

    ctx.find_duplicates(
        enum_type.values.iter().map(|value| value.node.value.node.as_str()),
        |ctx, name| ctx.push_error(format!("Enum value \"{type_name}.{name}\" can only be defined once.")),
    );
}
