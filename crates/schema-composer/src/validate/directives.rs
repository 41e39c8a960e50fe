use async_graphql_parser::{
    types::{ConstDirective, DirectiveDefinition, DirectiveLocation},
    Positioned,
};

use super::*;
use crate::render::location_name;

pub(crate) fn validate_directive_definition(definition: &DirectiveDefinition, ctx: &mut Context<'_>) {
    let name = definition.name.node.as_str();

    ctx.validate_name(name);
    validate_arguments(&format!("@{name}"), &definition.arguments, ctx);
}

/// Directives applied at `location`.
pub(crate) fn validate_directives(
    directives: &[Positioned<ConstDirective>],
    location: DirectiveLocation,
    ctx: &mut Context<'_>,
) {
    let registry = ctx.registry;

    for directive in directives {
        let name = directive.node.name.node.as_str();

        let Some(record) = registry.directives.get(name) else {
            ctx.push_error(format!("Unknown directive \"@{name}\"."));
            continue;
        };

        let definition = &record.definition;

        if !definition.locations.iter().any(|allowed| allowed.node == location) {
            ctx.push_error(format!(
                "Directive \"@{name}\" may not be used on {}.",
                location_name(&location)
            ));
        }

        for (argument, _) in &directive.node.arguments {
            let known = definition
                .arguments
                .iter()
                .any(|defined| defined.node.name.node == argument.node);

            if !known {
                ctx.push_error(format!(
                    "Unknown argument \"{}\" on directive \"@{name}\".",
                    argument.node
                ));
            }
        }

        ctx.find_duplicates(
            directive.node.arguments.iter().map(|(argument, _)| argument.node.as_str()),
            |ctx, argument| ctx.push_error(format!("There can be only one argument named \"{argument}\".")),
        );

        let missing = definition.arguments.iter().filter(|defined| {
            let defined = &defined.node;
            !defined.ty.node.nullable
                && defined.default_value.is_none()
                && !directive
                    .node
                    .arguments
                    .iter()
                    .any(|(argument, _)| argument.node == defined.name.node)
        });

        for argument in missing {
            ctx.push_error(format!(
                "Directive \"@{name}\" argument \"{}\" of type \"{}\" is required, but it was not provided.",
                argument.node.name.node, argument.node.ty.node
            ));
        }
    }

    let non_repeatable = directives.iter().map(|directive| directive.node.name.node.as_str()).filter(|name| {
        registry
            .directives
            .get(*name)
            .is_some_and(|record| !record.definition.is_repeatable)
    });

    ctx.find_duplicates(non_repeatable, |ctx, name| {
        ctx.push_error(format!("The directive \"@{name}\" can only be used once at this location."));
    });
}
