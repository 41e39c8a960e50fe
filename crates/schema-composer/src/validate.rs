mod directives;
mod enums;
mod implements;
mod input_objects;
mod objects;
mod schema_definition;
mod unions;

use std::collections::HashSet;

use async_graphql_parser::{
    types::{BaseType, DirectiveLocation, InputValueDefinition, Type, TypeDefinition, TypeKind},
    Positioned,
};

use crate::{
    diagnostics::Diagnostics,
    registry::{Origin, Registry},
};

pub(crate) struct Context<'a> {
    pub(crate) registry: &'a Registry,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Context<'a> {
    pub(crate) fn push_error(&mut self, message: String) {
        self.diagnostics.push(message);
    }

    pub(crate) fn get_type(&self, name: &str) -> Option<&'a TypeDefinition> {
        self.registry.get_type(name)
    }

    /// Report every name of `names` seen before.
    pub(crate) fn find_duplicates<'b>(
        &mut self,
        names: impl Iterator<Item = &'b str>,
        mut handle_duplicate: impl FnMut(&mut Self, &'b str),
    ) {
        let mut seen = HashSet::new();

        for name in names {
            if !seen.insert(name) {
                handle_duplicate(self, name);
            }
        }
    }

    pub(crate) fn validate_name(&mut self, name: &str) {
        if name.starts_with("__") {
            self.push_error(format!(
                "Name \"{name}\" must not begin with \"__\", which is reserved by GraphQL introspection."
            ));
        }
    }
}

/// All type-system rules, including the ones about root operation types.
pub(crate) fn validate(registry: &Registry, diagnostics: &mut Diagnostics) {
    let mut ctx = Context { registry, diagnostics };

    validate_types(&mut ctx);
    schema_definition::validate_root_types(&mut ctx);
}

/// The type-system rules for a set of definitions that is not meant to be a schema on its own.
pub(crate) fn validate_definitions(registry: &Registry, diagnostics: &mut Diagnostics) {
    let mut ctx = Context { registry, diagnostics };

    validate_types(&mut ctx);
}

fn validate_types(ctx: &mut Context<'_>) {
    let registry = ctx.registry;

    for record in registry.directives.values().filter(|record| record.origin != Origin::Builtin) {
        directives::validate_directive_definition(&record.definition, ctx);
    }

    for record in registry.types.values().filter(|record| record.origin != Origin::Builtin) {
        let definition = &record.definition;
        let type_name = definition.name.node.as_str();

        ctx.validate_name(type_name);

        match &definition.kind {
            TypeKind::Scalar => {
                directives::validate_directives(&definition.directives, DirectiveLocation::Scalar, ctx);
            }
            TypeKind::Object(object) => objects::validate_object(type_name, definition, object, ctx),
            TypeKind::Interface(interface) => objects::validate_interface(type_name, definition, interface, ctx),
            TypeKind::Union(union) => unions::validate_union(type_name, definition, union, ctx),
            TypeKind::Enum(enum_type) => enums::validate_enum(type_name, definition, enum_type, ctx),
            TypeKind::InputObject(input) => input_objects::validate_input_object(type_name, definition, input, ctx),
        }
    }

    if let Some(schema) = registry.schema.as_ref() {
        directives::validate_directives(&schema.directives, DirectiveLocation::Schema, ctx);
    }
}

/// Arguments of a field or of a directive definition.
fn validate_arguments(location: &str, arguments: &[Positioned<InputValueDefinition>], ctx: &mut Context<'_>) {
    for argument in arguments {
        let argument_name = argument.node.name.node.as_str();
        let coordinate = format!("{location}({argument_name}:)");

        ctx.validate_name(argument_name);
        directives::validate_directives(&argument.node.directives, DirectiveLocation::ArgumentDefinition, ctx);
        validate_input_type(&coordinate, &argument.node.ty.node, ctx);
    }

    ctx.find_duplicates(
        arguments.iter().map(|argument| argument.node.name.node.as_str()),
        |ctx, name| ctx.push_error(format!("Argument \"{location}({name}:)\" can only be defined once.")),
    );
}

fn validate_input_type(coordinate: &str, ty: &Type, ctx: &mut Context<'_>) {
    let type_name = named_type(ty);

    match ctx.get_type(type_name).map(|definition| &definition.kind) {
        None => ctx.push_error(format!("Unknown type \"{type_name}\".")),
        Some(TypeKind::Scalar | TypeKind::Enum(_) | TypeKind::InputObject(_)) => (),
        Some(_) => ctx.push_error(format!("The type of {coordinate} must be Input Type but got: {ty}.")),
    }
}

fn validate_output_type(coordinate: &str, ty: &Type, ctx: &mut Context<'_>) {
    let type_name = named_type(ty);

    match ctx.get_type(type_name).map(|definition| &definition.kind) {
        None => ctx.push_error(format!("Unknown type \"{type_name}\".")),
        Some(TypeKind::InputObject(_)) => {
            ctx.push_error(format!("The type of {coordinate} must be Output Type but got: {ty}."));
        }
        Some(_) => (),
    }
}

/// The innermost type name of a possibly wrapped type.
pub(crate) fn named_type(ty: &Type) -> &str {
    match &ty.base {
        BaseType::Named(name) => name.as_str(),
        BaseType::List(inner) => named_type(inner),
    }
}
