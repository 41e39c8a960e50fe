use std::{collections::HashMap, ops::RangeInclusive, sync::Arc};

use async_graphql::{dynamic::FieldValue, Name, Value};
use rand::{seq::SliceRandom, Rng};
use schema_composer::{
    ast::{BaseType, ConstDirective, Type, TypeKind},
    ComposedSchema,
};

use crate::{
    fake::{scalar_default, FakeOptions, FakeType},
    BuildError,
};

const DEFAULT_LIST_LENGTH: RangeInclusive<usize> = 2..=4;

const MAX_LIST_LENGTH: u64 = 1000;

/// What a value of each named output type looks like.
pub(crate) struct TypeIndex {
    kinds: HashMap<String, OutputKind>,
}

enum OutputKind {
    Scalar(LeafFaker),
    Enum(Vec<Name>),
    Object,
    Abstract(Vec<String>),
}

impl TypeIndex {
    pub(crate) fn new(schema: &ComposedSchema) -> Result<Self, BuildError> {
        let mut kinds = HashMap::new();

        for ty in schema.types() {
            let definition = ty.definition();

            let kind = match &definition.kind {
                TypeKind::Scalar => {
                    let directives = definition.directives.iter().map(|directive| &directive.node);
                    OutputKind::Scalar(LeafFaker::from_directives(ty.name(), directives)?)
                }
                TypeKind::Enum(enum_type) => OutputKind::Enum(
                    enum_type
                        .values
                        .iter()
                        .map(|value| value.node.value.node.clone())
                        .collect(),
                ),
                TypeKind::Object(_) => OutputKind::Object,
                TypeKind::Interface(_) | TypeKind::Union(_) => OutputKind::Abstract(
                    schema
                        .possible_types(ty.name())
                        .into_iter()
                        .map(str::to_owned)
                        .collect(),
                ),
                TypeKind::InputObject(_) => continue,
            };

            kinds.insert(ty.name().to_owned(), kind);
        }

        Ok(Self { kinds })
    }
}

/// The `@examples` and `@fake` directives of a field or a scalar.
#[derive(Debug, Clone, Default)]
pub(crate) struct LeafFaker {
    examples: Vec<Value>,
    fake: Option<(FakeType, FakeOptions)>,
}

impl LeafFaker {
    fn from_directives<'a>(
        coordinate: &str,
        directives: impl Iterator<Item = &'a ConstDirective>,
    ) -> Result<Self, BuildError> {
        let mut faker = LeafFaker::default();

        for directive in directives {
            match directive.name.node.as_str() {
                "examples" => {
                    if let Some(Value::List(values)) = directive.get_argument("values").map(|value| &value.node) {
                        faker.examples.clone_from(values);
                    }
                }
                "fake" => {
                    let invalid = |message: String| BuildError::InvalidDirective {
                        directive: "fake",
                        coordinate: coordinate.to_owned(),
                        message,
                    };

                    let fake_type = directive
                        .get_argument("type")
                        .map(|value| value.node.clone().into_json())
                        .transpose()
                        .map_err(|error| invalid(error.to_string()))?
                        .ok_or_else(|| invalid("missing type".to_owned()))?;

                    let fake_type = serde_json::from_value(fake_type).map_err(|error| invalid(error.to_string()))?;

                    let options: FakeOptions = match directive.get_argument("options") {
                        Some(options) => {
                            let options = options.node.clone().into_json().map_err(|error| invalid(error.to_string()))?;
                            serde_json::from_value(options).map_err(|error| invalid(error.to_string()))?
                        }
                        None => FakeOptions::default(),
                    };

                    options.validate().map_err(invalid)?;

                    faker.fake = Some((fake_type, options));
                }
                _ => (),
            }
        }

        Ok(faker)
    }

    fn is_empty(&self) -> bool {
        self.examples.is_empty() && self.fake.is_none()
    }

    fn generate(&self, scalar: &str, rng: &mut impl Rng) -> Value {
        if let Some(example) = self.examples.choose(rng) {
            return example.clone();
        }

        match &self.fake {
            Some((fake_type, options)) => fake_type.generate(options, rng),
            None => scalar_default(scalar, rng),
        }
    }
}

/// Produces the fake value of one field.
pub(crate) struct FieldFaker {
    ty: Type,
    leaf: LeafFaker,
    list_length: Option<RangeInclusive<usize>>,
    types: Arc<TypeIndex>,
}

impl FieldFaker {
    pub(crate) fn new<'a>(
        coordinate: &str,
        ty: &Type,
        directives: impl Iterator<Item = &'a ConstDirective> + Clone,
        types: Arc<TypeIndex>,
    ) -> Result<Self, BuildError> {
        let leaf = LeafFaker::from_directives(coordinate, directives.clone())?;

        let list_length = directives
            .filter(|directive| directive.name.node == "listLength")
            .map(|directive| list_length(coordinate, directive))
            .last()
            .transpose()?;

        Ok(Self {
            ty: ty.clone(),
            leaf,
            list_length,
            types,
        })
    }

    pub(crate) fn resolve<'a>(&self) -> FieldValue<'a> {
        let mut rng = rand::thread_rng();
        self.fake_value(&self.ty, &mut rng)
    }

    fn fake_value<'a>(&self, ty: &Type, rng: &mut impl Rng) -> FieldValue<'a> {
        match &ty.base {
            BaseType::List(item) => {
                let range = self.list_length.clone().unwrap_or(DEFAULT_LIST_LENGTH);
                let length = rng.gen_range(range);

                FieldValue::list((0..length).map(|_| self.fake_value(item, rng)).collect::<Vec<_>>())
            }
            BaseType::Named(name) => self.fake_named(name, rng),
        }
    }

    fn fake_named<'a>(&self, name: &str, rng: &mut impl Rng) -> FieldValue<'a> {
        match self.types.kinds.get(name) {
            Some(OutputKind::Scalar(scalar)) => {
                let faker = if self.leaf.is_empty() { scalar } else { &self.leaf };
                FieldValue::value(faker.generate(name, rng))
            }
            Some(OutputKind::Enum(values)) => match self.leaf.examples.choose(rng) {
                Some(example) => FieldValue::value(example.clone()),
                None => values
                    .choose(rng)
                    .map(|value| FieldValue::value(Value::Enum(value.clone())))
                    .unwrap_or(FieldValue::NULL),
            },
            Some(OutputKind::Object) => FieldValue::owned_any(()),
            Some(OutputKind::Abstract(possible_types)) => match possible_types.choose(rng) {
                Some(object) => FieldValue::owned_any(()).with_type(object.clone()),
                None => FieldValue::NULL,
            },
            None => FieldValue::NULL,
        }
    }
}

fn list_length(coordinate: &str, directive: &ConstDirective) -> Result<RangeInclusive<usize>, BuildError> {
    let bound = |name: &str| {
        directive
            .get_argument(name)
            .and_then(|value| match &value.node {
                Value::Number(number) => number.as_u64(),
                _ => None,
            })
            .ok_or_else(|| BuildError::InvalidDirective {
                directive: "listLength",
                coordinate: coordinate.to_owned(),
                message: format!("`{name}` must be a non-negative integer"),
            })
    };

    let (min, max) = (bound("min")?, bound("max")?);

    if min > max {
        return Err(BuildError::InvalidDirective {
            directive: "listLength",
            coordinate: coordinate.to_owned(),
            message: format!("`min` ({min}) is greater than `max` ({max})"),
        });
    }

    if max > MAX_LIST_LENGTH {
        return Err(BuildError::InvalidDirective {
            directive: "listLength",
            coordinate: coordinate.to_owned(),
            message: format!("`max` ({max}) is greater than {MAX_LIST_LENGTH}"),
        });
    }

    Ok(min as usize..=max as usize)
}
