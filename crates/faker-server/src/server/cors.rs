use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::CorsConfig;

/// Credentials are always allowed. The origin is the configured one, or else whatever the request
/// came from. A `*` origin cannot go with credentials, so it mirrors the request as well.
pub(super) fn generate(config: &CorsConfig) -> crate::Result<CorsLayer> {
    let allow_origin = match config.allow_origin.as_deref() {
        None | Some("*") => AllowOrigin::mirror_request(),
        Some(origin) => {
            let origin = origin.strip_suffix('/').unwrap_or(origin);

            HeaderValue::from_str(origin)
                .map(AllowOrigin::exact)
                .map_err(|_| crate::Error::InvalidCorsOrigin(origin.to_owned()))?
        }
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request()))
}
