use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
};
use graphql_faker::{FakeSchema, ForwardedHeaders};
use idl_store::SchemaName;

use super::state::ServerState;
use crate::error::ApiError;

/// `GET` executes a query passed as URL parameters, or opens GraphiQL when there is none.
pub(super) async fn graphql_get(
    State(state): State<ServerState>,
    name: Option<Path<String>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, ApiError> {
    let Some(query) = uri.query().filter(|query| has_query_parameter(query)) else {
        return Ok(Html(GraphiQLSource::build().endpoint(uri.path()).finish()).into_response());
    };

    let request =
        async_graphql::http::parse_query_string(query).map_err(|error| ApiError::BadRequest(error.to_string()))?;

    execute(&state, name, &headers, request).await
}

pub(super) async fn graphql_post(
    State(state): State<ServerState>,
    name: Option<Path<String>>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> Result<Response, ApiError> {
    execute(&state, name, &headers, request.into_inner()).await
}

async fn execute(
    state: &ServerState,
    name: Option<Path<String>>,
    headers: &HeaderMap,
    request: async_graphql::Request,
) -> Result<Response, ApiError> {
    let name = SchemaName::from_path(name.as_ref().map(|Path(name)| name.as_str()))?;
    let schema = resolve_schema(state, &name).await?;
    let forwarded = ForwardedHeaders::select(headers, &state.forward_headers);

    let response = schema.execute(request, forwarded).await;

    Ok(GraphQLResponse::from(response).into_response())
}

/// Compose the stored document of `name` from scratch.
async fn resolve_schema(state: &ServerState, name: &SchemaName) -> Result<FakeSchema, ApiError> {
    tracing::debug!("resolving schema {name}");

    let idl = state.store.read(name).await?;

    let composed = state.composer.compose(&idl, None).map_err(|error| {
        tracing::error!("stored schema {name} does not compose: {error}");
        error
    })?;

    Ok(FakeSchema::build(&composed)?)
}

fn has_query_parameter(query: &str) -> bool {
    url::form_urlencoded::parse(query.as_bytes()).any(|(key, _)| key == "query")
}
