use std::sync::Arc;

use async_graphql::{
    dynamic::{
        Enum, EnumItem, Field, FieldFuture, InputObject, InputValue, Interface, InterfaceField, Object, Scalar, Schema,
        TypeRef, Union,
    },
    Value,
};
use schema_composer::{
    ast::{
        BaseType, ConstDirective, FieldDefinition, InputValueDefinition, InterfaceType, ObjectType, Type,
        TypeDefinition, TypeKind,
    },
    ComposedSchema, Origin, Positioned, SchemaType,
};

use crate::{
    resolvers::{FieldFaker, TypeIndex},
    BuildError,
};

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub(crate) fn build_schema(composed: &ComposedSchema) -> Result<Schema, BuildError> {
    let types = Arc::new(TypeIndex::new(composed)?);

    let mut builder = Schema::build(composed.query_type(), composed.mutation_type(), None);

    for ty in composed.types() {
        // The standard scalars are part of every executable schema already.
        if ty.origin() == Origin::Builtin {
            continue;
        }

        builder = match &ty.definition().kind {
            TypeKind::Scalar => builder.register(scalar(ty)),
            TypeKind::Object(object) => builder.register(object_type(ty, object, &types)?),
            TypeKind::Interface(interface) => builder.register(interface_type(ty, interface)),
            TypeKind::Union(union) => {
                let union = union
                    .members
                    .iter()
                    .fold(Union::new(ty.name()), |union, member| union.possible_type(member.node.as_str()));

                builder.register(with_description(union, ty.definition(), Union::description))
            }
            TypeKind::Enum(enum_type) => {
                let enum_type = enum_type.values.iter().fold(Enum::new(ty.name()), |enum_type, value| {
                    let mut item = EnumItem::new(value.node.value.node.as_str());

                    if let Some(description) = &value.node.description {
                        item = item.description(description.node.as_str());
                    }

                    enum_type.item(item.deprecation(deprecation(&value.node.directives)))
                });

                builder.register(with_description(enum_type, ty.definition(), Enum::description))
            }
            TypeKind::InputObject(input) => {
                let mut input_object = input
                    .fields
                    .iter()
                    .fold(InputObject::new(ty.name()), |input_object, field| {
                        input_object.field(input_value(&field.node))
                    });

                if has_directive(&ty.definition().directives, "oneOf") {
                    input_object = input_object.oneof();
                }

                builder.register(with_description(input_object, ty.definition(), InputObject::description))
            }
        };
    }

    builder.finish().map_err(|error| BuildError::Schema(error.to_string()))
}

fn scalar(ty: SchemaType<'_>) -> Scalar {
    let mut scalar = with_description(Scalar::new(ty.name()), ty.definition(), Scalar::description);

    let specified_by = ty
        .definition()
        .directives
        .iter()
        .find(|directive| directive.node.name.node == "specifiedBy")
        .and_then(|directive| directive.node.get_argument("url"))
        .and_then(|url| match &url.node {
            Value::String(url) => Some(url.clone()),
            _ => None,
        });

    if let Some(url) = specified_by {
        scalar = scalar.specified_by_url(url);
    }

    scalar
}

fn object_type(ty: SchemaType<'_>, object: &ObjectType, types: &Arc<TypeIndex>) -> Result<Object, BuildError> {
    let mut output = with_description(Object::new(ty.name()), ty.definition(), Object::description);

    for interface in &object.implements {
        output = output.implement(interface.node.as_str());
    }

    for field in &object.fields {
        output = output.field(field_with_resolver(ty.name(), &field.node, types)?);
    }

    Ok(output)
}

fn field_with_resolver(type_name: &str, field: &FieldDefinition, types: &Arc<TypeIndex>) -> Result<Field, BuildError> {
    let coordinate = format!("{type_name}.{}", field.name.node);
    let directives = field.directives.iter().map(|directive| &directive.node);
    let faker = Arc::new(FieldFaker::new(&coordinate, &field.ty.node, directives, types.clone())?);

    let mut output = Field::new(field.name.node.as_str(), type_ref(&field.ty.node), move |_| {
        let value = faker.resolve();
        FieldFuture::new(async move { Ok(Some(value)) })
    });

    if let Some(description) = &field.description {
        output = output.description(description.node.as_str());
    }

    for argument in &field.arguments {
        output = output.argument(input_value(&argument.node));
    }

    Ok(output.deprecation(deprecation(&field.directives)))
}

fn interface_type(ty: SchemaType<'_>, interface: &InterfaceType) -> Interface {
    let output = with_description(Interface::new(ty.name()), ty.definition(), Interface::description);

    interface.fields.iter().fold(output, |output, field| {
        let field = &field.node;
        let mut interface_field = InterfaceField::new(field.name.node.as_str(), type_ref(&field.ty.node));

        if let Some(description) = &field.description {
            interface_field = interface_field.description(description.node.as_str());
        }

        for argument in &field.arguments {
            interface_field = interface_field.argument(input_value(&argument.node));
        }

        output.field(interface_field)
    })
}

fn input_value(definition: &InputValueDefinition) -> InputValue {
    let mut input = InputValue::new(definition.name.node.as_str(), type_ref(&definition.ty.node));

    if let Some(description) = &definition.description {
        input = input.description(description.node.as_str());
    }

    if let Some(default_value) = &definition.default_value {
        input = input.default_value(default_value.node.clone());
    }

    input
}

fn type_ref(ty: &Type) -> TypeRef {
    let base = match &ty.base {
        BaseType::Named(name) => TypeRef::named(name.as_str()),
        BaseType::List(item) => TypeRef::List(Box::new(type_ref(item))),
    };

    if ty.nullable {
        base
    } else {
        TypeRef::NonNull(Box::new(base))
    }
}

fn with_description<T>(item: T, definition: &TypeDefinition, describe: impl FnOnce(T, String) -> T) -> T {
    match &definition.description {
        Some(description) => describe(item, description.node.clone()),
        None => item,
    }
}

fn deprecation<'a>(directives: &'a [Positioned<ConstDirective>]) -> Option<&'a str> {
    directives
        .iter()
        .find(|directive| directive.node.name.node == "deprecated")
        .map(|directive| {
            directive
                .node
                .get_argument("reason")
                .and_then(|reason| match &reason.node {
                    Value::String(reason) => Some(reason.as_str()),
                    _ => None,
                })
                .unwrap_or(DEFAULT_DEPRECATION_REASON)
        })
}

fn has_directive(directives: &[Positioned<ConstDirective>], name: &str) -> bool {
    directives.iter().any(|directive| directive.node.name.node == name)
}
