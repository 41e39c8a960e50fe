mod cors;
mod editor;
mod graphql;
mod state;
mod user_idl;

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use idl_store::{FileIdlStore, IdlStore, SchemaName};
use tokio::{net::TcpListener, signal};
use tower_http::services::ServeDir;

use self::state::ServerState;
use crate::Config;

/// The example document written to the default slot of an empty schema directory.
pub const DEFAULT_SCHEMA: &str = include_str!("server/default_schema.graphql");

/// Hooks into the server lifecycle.
#[allow(unused_variables)]
pub trait ServerRuntime: Send + Sync + 'static {
    /// Called once the server listens, with the URL of the editor.
    fn on_ready(&self, editor_url: &str) {}
}

impl ServerRuntime for () {}

/// Serve the schemas of `config.schema_dir` until Ctrl+C or SIGTERM.
pub async fn serve(config: Config, server_runtime: impl ServerRuntime) -> crate::Result<()> {
    let store = FileIdlStore::new(&config.schema_dir);

    if store
        .seed(&SchemaName::default_slot(), DEFAULT_SCHEMA)
        .await
        .map_err(crate::Error::Seed)?
    {
        tracing::info!(
            "example schema written to {}",
            store.path(&SchemaName::default_slot()).display()
        );
    }

    tracing::info!("ENABLE_EDIT_MODE={}", config.edit_mode);

    let router = router(&config, Arc::new(store))?;

    let listener = TcpListener::bind(config.network.listen_address)
        .await
        .map_err(crate::Error::Server)?;

    let address = listener.local_addr().map_err(crate::Error::Server)?;
    let editor_url = format!("http://{}/editor", display_address(address));

    tracing::info!("Your GraphQL Fake API is ready to use");
    tracing::info!("Interactive Editor: {editor_url}");
    tracing::info!("GraphQL API: http://{}/graphql", display_address(address));

    server_runtime.on_ready(&editor_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(graceful_shutdown())
        .await
        .map_err(crate::Error::Server)
}

/// All routes of the faker, backed by `store`.
pub fn router(config: &Config, store: Arc<dyn IdlStore>) -> crate::Result<Router> {
    let state = ServerState::new(config, store)?;
    let cors = cors::generate(&config.cors)?;

    let user_idl = get(user_idl::get_user_idl).post(user_idl::post_user_idl);
    let graphql = get(graphql::graphql_get).post(graphql::graphql_post);
    let editor = get(editor::editor_page);

    let mut router = Router::new()
        .route("/user-idl", user_idl.clone())
        .route("/user-idl/", user_idl.clone())
        .route("/user-idl/:schema_name", user_idl)
        .route("/graphql", graphql.clone())
        .route("/graphql/", graphql.clone())
        .route("/graphql/:schema_name", graphql)
        .route("/editor", editor.clone())
        .route("/editor/", editor.clone())
        .route("/editor/:schema_name", editor);

    if let Some(assets_dir) = &config.editor.assets_dir {
        router = router.fallback_service(ServeDir::new(assets_dir));
    }

    Ok(router
        .layer(DefaultBodyLimit::max(config.request_body_limit))
        .layer(cors)
        .with_state(state))
}

/// Unspecified addresses are shown as `localhost`, that is where a browser finds them.
fn display_address(address: SocketAddr) -> String {
    if address.ip().is_unspecified() || address.ip().is_loopback() {
        format!("localhost:{}", address.port())
    } else {
        address.to_string()
    }
}

async fn graceful_shutdown() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install SIGTERM handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
}
