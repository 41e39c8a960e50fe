//! The HTTP side of the faker: schema documents under `/user-idl`, fake GraphQL APIs under
//! `/graphql` and the editor under `/editor`.
//!
//! Every GraphQL request reads its document from the [`IdlStore`](idl_store::IdlStore) and composes
//! it again. There is no schema cache, a saved document is served by the very next request.

#![deny(unsafe_code)]

mod config;
mod error;
mod server;

pub use self::{
    config::{Config, CorsConfig, EditorConfig, NetworkConfig},
    error::Error,
    server::{router, serve, ServerRuntime, DEFAULT_SCHEMA},
};

pub type Result<T> = std::result::Result<T, Error>;
