//! An executable schema answering every query with fake data.
//!
//! The schema is built from a [`ComposedSchema`]. Every field resolves to a plausible value of its
//! type, shaped by the `@fake`, `@examples` and `@listLength` directives of the auxiliary fragment.

#![deny(unsafe_code)]

mod builder;
mod error;
pub mod fake;
mod headers;
mod resolvers;

use async_graphql::{Request, Response};
use schema_composer::ComposedSchema;

pub use self::{error::BuildError, headers::ForwardedHeaders};

/// An executable schema with fake resolvers.
#[derive(Clone)]
pub struct FakeSchema {
    schema: async_graphql::dynamic::Schema,
}

impl FakeSchema {
    pub fn build(composed: &ComposedSchema) -> Result<Self, BuildError> {
        let schema = builder::build_schema(composed).inspect_err(|error| {
            tracing::debug!("cannot build a fake schema: {error}");
        })?;

        Ok(Self { schema })
    }

    /// Execute one request. The forwarded headers are available to resolvers as request data.
    pub async fn execute(&self, request: impl Into<Request>, headers: ForwardedHeaders) -> Response {
        tracing::debug!("executing with {} forwarded headers", headers.as_header_map().len());

        let request = request.into().data(headers);

        self.schema.execute(request).await
    }

    /// The executable schema as IDL, introspection types excluded.
    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }
}
