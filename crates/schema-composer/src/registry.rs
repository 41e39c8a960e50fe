use std::fmt;

use async_graphql_parser::{
    types::{
        ConstDirective, DirectiveDefinition, EnumValueDefinition, FieldDefinition, InputValueDefinition,
        SchemaDefinition, ServiceDocument, TypeDefinition, TypeKind, TypeSystemDefinition,
    },
    Pos, Positioned,
};
use async_graphql_value::Name;
use indexmap::IndexMap;

use crate::{diagnostics::Diagnostics, schema::RootOperation};

/// Where a definition of the composed schema comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The standard scalars and directives.
    Builtin,
    /// The auxiliary fragment merged into every schema.
    Auxiliary,
    /// The base schema being extended.
    Base,
    /// The primary document.
    User,
}

impl Origin {
    /// Definitions printed back as SDL.
    pub fn is_printed(self) -> bool {
        matches!(self, Origin::Base | Origin::User)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TypeRecord {
    pub(crate) origin: Origin,
    pub(crate) definition: TypeDefinition,
}

#[derive(Debug, Clone)]
pub(crate) struct DirectiveRecord {
    pub(crate) origin: Origin,
    pub(crate) definition: DirectiveDefinition,
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaRecord {
    pub(crate) origin: Origin,
    /// An explicit `schema { ... }` definition disables the default root type names.
    pub(crate) defined: bool,
    pub(crate) query: Option<Positioned<Name>>,
    pub(crate) mutation: Option<Positioned<Name>>,
    pub(crate) subscription: Option<Positioned<Name>>,
    pub(crate) directives: Vec<Positioned<ConstDirective>>,
}

impl SchemaRecord {
    fn root(&self, operation: RootOperation) -> Option<&Positioned<Name>> {
        match operation {
            RootOperation::Query => self.query.as_ref(),
            RootOperation::Mutation => self.mutation.as_ref(),
            RootOperation::Subscription => self.subscription.as_ref(),
        }
    }

    fn root_mut(&mut self, operation: RootOperation) -> &mut Option<Positioned<Name>> {
        match operation {
            RootOperation::Query => &mut self.query,
            RootOperation::Mutation => &mut self.mutation,
            RootOperation::Subscription => &mut self.subscription,
        }
    }
}

/// All definitions of a schema, in definition order, with extensions merged in.
#[derive(Debug, Clone, Default)]
pub(crate) struct Registry {
    pub(crate) types: IndexMap<String, TypeRecord>,
    pub(crate) directives: IndexMap<String, DirectiveRecord>,
    pub(crate) schema: Option<SchemaRecord>,
}

impl Registry {
    /// Add the definitions of `document`, then apply its extensions. Extensions may target types
    /// of the same document regardless of their order, or anything defined before.
    pub(crate) fn ingest(&mut self, document: ServiceDocument, origin: Origin, diagnostics: &mut Diagnostics) {
        let mut type_extensions = Vec::new();
        let mut schema_extensions = Vec::new();

        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Type(definition) if definition.node.extend => {
                    type_extensions.push(definition.node);
                }
                TypeSystemDefinition::Type(definition) => self.define_type(definition.node, origin, diagnostics),
                TypeSystemDefinition::Schema(definition) if definition.node.extend => {
                    schema_extensions.push(definition.node);
                }
                TypeSystemDefinition::Schema(definition) => self.define_schema(definition.node, origin, diagnostics),
                TypeSystemDefinition::Directive(definition) => {
                    self.define_directive(definition.node, origin, diagnostics);
                }
            }
        }

        for extension in schema_extensions {
            self.extend_schema(extension, origin, diagnostics);
        }

        for extension in type_extensions {
            self.extend_type(extension, origin, diagnostics);
        }
    }

    /// The name of the root type of `operation`, if the schema has one.
    pub(crate) fn root_type(&self, operation: RootOperation) -> Option<&str> {
        let schema = self.schema.as_ref();

        if let Some(name) = schema.and_then(|schema| schema.root(operation)) {
            return Some(name.node.as_str());
        }

        if schema.is_some_and(|schema| schema.defined) {
            return None;
        }

        let default_name = operation.default_type_name();
        self.types.contains_key(default_name).then_some(default_name)
    }

    pub(crate) fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name).map(|record| &record.definition)
    }

    fn define_type(&mut self, definition: TypeDefinition, origin: Origin, diagnostics: &mut Diagnostics) {
        let name = definition.name.node.to_string();

        if let Some(existing) = self.types.get(&name) {
            match existing.origin {
                // Restating a standard scalar changes nothing.
                Origin::Builtin if matches!(definition.kind, TypeKind::Scalar) => (),
                existing if existing == origin => {
                    diagnostics.push(format!("There can be only one type named \"{name}\"."));
                }
                _ => diagnostics.push(format!(
                    "Type \"{name}\" already exists in the schema. It cannot also be defined in this type definition."
                )),
            }

            return;
        }

        self.types.insert(name, TypeRecord { origin, definition });
    }

    fn define_directive(&mut self, definition: DirectiveDefinition, origin: Origin, diagnostics: &mut Diagnostics) {
        let name = definition.name.node.to_string();

        if let Some(existing) = self.directives.get(&name) {
            if existing.origin == origin {
                diagnostics.push(format!("There can be only one directive named \"@{name}\"."));
            } else {
                diagnostics.push(format!(
                    "Directive \"@{name}\" already exists in the schema. It cannot be redefined."
                ));
            }

            return;
        }

        self.directives.insert(name, DirectiveRecord { origin, definition });
    }

    fn define_schema(&mut self, definition: SchemaDefinition, origin: Origin, diagnostics: &mut Diagnostics) {
        let extending = match &self.schema {
            Some(existing) if existing.origin == origin => {
                diagnostics.push("Must provide only one schema definition.".to_owned());
                return;
            }
            Some(_) => true,
            None => self
                .types
                .values()
                .any(|record| record.origin.is_printed() && record.origin != origin),
        };

        if extending {
            diagnostics.push("Cannot define a new schema within a schema extension.".to_owned());
            return;
        }

        self.schema = Some(SchemaRecord {
            origin,
            defined: true,
            query: definition.query,
            mutation: definition.mutation,
            subscription: definition.subscription,
            directives: definition.directives,
        });
    }

    fn extend_schema(&mut self, extension: SchemaDefinition, origin: Origin, diagnostics: &mut Diagnostics) {
        // Roots implied by the type names of earlier documents stay in place when the schema gets
        // extended.
        let implied = RootOperation::ALL.map(|operation| {
            let name = operation.default_type_name();
            let inherited = self.schema.is_none()
                && self
                    .types
                    .get(name)
                    .is_some_and(|record| record.origin != origin && record.origin.is_printed());

            inherited.then(|| Positioned::new(Name::new(name), Pos { line: 0, column: 0 }))
        });

        let schema = self.schema.get_or_insert_with(|| SchemaRecord {
            origin,
            defined: false,
            query: None,
            mutation: None,
            subscription: None,
            directives: Vec::new(),
        });

        for (operation, implied) in RootOperation::ALL.into_iter().zip(implied) {
            let root = schema.root_mut(operation);

            if root.is_none() {
                *root = implied;
            }
        }

        schema.directives.extend(extension.directives);

        let added = [
            (RootOperation::Query, extension.query),
            (RootOperation::Mutation, extension.mutation),
            (RootOperation::Subscription, extension.subscription),
        ];

        for (operation, name) in added {
            let Some(name) = name else { continue };
            let root = schema.root_mut(operation);

            if root.is_some() {
                diagnostics.push(format!(
                    "Type for {operation} already defined in the schema. It cannot be redefined."
                ));
            } else {
                *root = Some(name);
            }
        }
    }

    fn extend_type(&mut self, extension: TypeDefinition, origin: Origin, diagnostics: &mut Diagnostics) {
        let name = extension.name.node.to_string();

        let Some(record) = self.types.get_mut(&name) else {
            diagnostics.push(format!("Cannot extend type \"{name}\" because it is not defined."));
            return;
        };

        if std::mem::discriminant(&record.definition.kind) != std::mem::discriminant(&extension.kind) {
            diagnostics.push(format!(
                "Cannot extend non-{} type \"{name}\".",
                KindName(&extension.kind)
            ));
            return;
        }

        let conflict = if record.origin == origin {
            Conflict::SameDocument
        } else {
            Conflict::ExistingSchema
        };

        let target = &mut record.definition;
        target.directives.extend(extension.directives);

        match (&mut target.kind, extension.kind) {
            (TypeKind::Object(object), TypeKind::Object(added)) => {
                extend_implements(&mut object.implements, added.implements);
                extend_fields(&name, &mut object.fields, added.fields, conflict, diagnostics);
            }
            (TypeKind::Interface(interface), TypeKind::Interface(added)) => {
                extend_implements(&mut interface.implements, added.implements);
                extend_fields(&name, &mut interface.fields, added.fields, conflict, diagnostics);
            }
            (TypeKind::Union(union), TypeKind::Union(added)) => {
                for member in added.members {
                    if union.members.iter().any(|existing| existing.node == member.node) {
                        diagnostics.push(format!(
                            "Union type \"{name}\" can only include type \"{}\" once.",
                            member.node
                        ));
                    } else {
                        union.members.push(member);
                    }
                }
            }
            (TypeKind::Enum(enum_type), TypeKind::Enum(added)) => {
                extend_enum_values(&name, &mut enum_type.values, added.values, conflict, diagnostics);
            }
            (TypeKind::InputObject(input), TypeKind::InputObject(added)) => {
                extend_input_fields(&name, &mut input.fields, added.fields, conflict, diagnostics);
            }
            _ => (),
        }
    }
}

#[derive(Clone, Copy)]
enum Conflict {
    SameDocument,
    ExistingSchema,
}

impl Conflict {
    fn message(self, what: &str, coordinate: &str) -> String {
        match self {
            Conflict::SameDocument => format!("{what} \"{coordinate}\" can only be defined once."),
            Conflict::ExistingSchema => format!(
                "{what} \"{coordinate}\" already exists in the schema. It cannot also be defined in this type extension."
            ),
        }
    }
}

fn extend_implements(implements: &mut Vec<Positioned<Name>>, added: Vec<Positioned<Name>>) {
    for interface in added {
        if !implements.iter().any(|existing| existing.node == interface.node) {
            implements.push(interface);
        }
    }
}

fn extend_fields(
    type_name: &str,
    fields: &mut Vec<Positioned<FieldDefinition>>,
    added: Vec<Positioned<FieldDefinition>>,
    conflict: Conflict,
    diagnostics: &mut Diagnostics,
) {
    for field in added {
        if fields.iter().any(|existing| existing.node.name.node == field.node.name.node) {
            let coordinate = format!("{type_name}.{}", field.node.name.node);
            diagnostics.push(conflict.message("Field", &coordinate));
        } else {
            fields.push(field);
        }
    }
}

fn extend_input_fields(
    type_name: &str,
    fields: &mut Vec<Positioned<InputValueDefinition>>,
    added: Vec<Positioned<InputValueDefinition>>,
    conflict: Conflict,
    diagnostics: &mut Diagnostics,
) {
    for field in added {
        if fields.iter().any(|existing| existing.node.name.node == field.node.name.node) {
            let coordinate = format!("{type_name}.{}", field.node.name.node);
            diagnostics.push(conflict.message("Field", &coordinate));
        } else {
            fields.push(field);
        }
    }
}

fn extend_enum_values(
    type_name: &str,
    values: &mut Vec<Positioned<EnumValueDefinition>>,
    added: Vec<Positioned<EnumValueDefinition>>,
    conflict: Conflict,
    diagnostics: &mut Diagnostics,
) {
    for value in added {
        if values.iter().any(|existing| existing.node.value.node == value.node.value.node) {
            let coordinate = format!("{type_name}.{}", value.node.value.node);
            diagnostics.push(conflict.message("Enum value", &coordinate));
        } else {
            values.push(value);
        }
    }
}

/// The lowercase name of a type kind, as used in messages.
pub(crate) struct KindName<'a>(pub(crate) &'a TypeKind);

impl fmt::Display for KindName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.0 {
            TypeKind::Scalar => "scalar",
            TypeKind::Object(_) => "object",
            TypeKind::Interface(_) => "interface",
            TypeKind::Union(_) => "union",
            TypeKind::Enum(_) => "enum",
            TypeKind::InputObject(_) => "input object",
        })
    }
}
