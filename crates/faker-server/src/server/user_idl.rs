use axum::{
    extract::{Path, State},
    Json,
};
use idl_store::SchemaName;

use super::state::ServerState;
use crate::error::ApiError;

#[derive(Debug, serde::Serialize)]
pub(super) struct UserIdlResponse {
    #[serde(rename = "schemaIDL")]
    schema_idl: String,
    #[serde(rename = "editMode", skip_serializing_if = "Option::is_none")]
    edit_mode: Option<bool>,
}

/// The stored document of a schema, as the editor loads it.
pub(super) async fn get_user_idl(
    State(state): State<ServerState>,
    name: Option<Path<String>>,
) -> Result<Json<UserIdlResponse>, ApiError> {
    let name = SchemaName::from_path(name.as_ref().map(|Path(name)| name.as_str()))?;
    let schema_idl = state.store.read(&name).await?;

    Ok(Json(UserIdlResponse {
        schema_idl,
        edit_mode: (!state.edit_mode).then_some(false),
    }))
}

/// Replace the stored document of a schema. The body is the raw IDL text, stored without any
/// validation.
pub(super) async fn post_user_idl(
    State(state): State<ServerState>,
    name: Option<Path<String>>,
    body: String,
) -> Result<&'static str, ApiError> {
    if !state.edit_mode {
        tracing::warn!("rejected a schema save, edit mode is disabled");
        return Err(ApiError::EditDisabled);
    }

    let name = SchemaName::from_path(name.as_ref().map(|Path(name)| name.as_str()))?;

    state.store.write(&name, &body).await.map_err(|error| {
        tracing::error!("saving schema {name} failed: {error}");
        error
    })?;

    Ok("ok")
}
