use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::state::ServerState;

/// Served when no editor bundle is configured.
const EDITOR_SHELL: &str = include_str!("editor_shell.html");

/// The editor page for any schema name, the page itself reads the name from its URL.
pub(super) async fn editor_page(State(state): State<ServerState>) -> Response {
    let Some(index) = &state.editor_index else {
        return Html(EDITOR_SHELL).into_response();
    };

    match tokio::fs::read_to_string(index).await {
        Ok(page) => Html(page).into_response(),
        Err(error) => {
            tracing::error!("reading editor page {}: {error}", index.display());
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}
