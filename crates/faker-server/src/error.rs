use std::{io, path::PathBuf};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use graphql_faker::BuildError;
use idl_store::StoreError;
use schema_composer::CompositionError;

/// The faker server error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("reading config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid forwarded header name \"{0}\"")]
    InvalidHeaderName(String),
    #[error("invalid CORS origin \"{0}\"")]
    InvalidCorsOrigin(String),
    /// Writing the example schema to the default slot failed
    #[error("seeding the default schema: {0}")]
    Seed(#[source] StoreError),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] io::Error),
}

/// What a request handler can fail with. Each variant knows its status code and body.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Schema not editable. ENABLE_EDIT_MODE is false")]
    EditDisabled,
    #[error(transparent)]
    Composition(#[from] CompositionError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            ApiError::Store(StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": message }))).into_response()
            }
            ApiError::Store(StoreError::InvalidName(_)) | ApiError::EditDisabled | ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::Store(StoreError::Io(_)) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
            ApiError::Composition(_) | ApiError::Build(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "errors": [{ "message": message }] })),
            )
                .into_response(),
        }
    }
}
