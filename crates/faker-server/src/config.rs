use std::{
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

/// Upper bound for a saved document or a GraphQL request body.
const DEFAULT_REQUEST_BODY_LIMIT: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Settings of the faker server, read from an optional TOML file and overridden by command line
/// arguments.
pub struct Config {
    /// Server bind settings
    pub network: NetworkConfig,
    /// Directory with one `<name>.graphql` file per schema
    pub schema_dir: PathBuf,
    /// If false, saving schemas is rejected
    pub edit_mode: bool,
    /// Request headers made available to resolvers, matched case-insensitively
    pub forward_headers: Vec<String>,
    /// Maximum size in bytes of a request body
    pub request_body_limit: usize,
    /// Cross-origin resource sharing settings
    pub cors: CorsConfig,
    /// Editor bundle settings
    pub editor: EditorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            schema_dir: PathBuf::from("schemas"),
            edit_mode: true,
            forward_headers: Vec::new(),
            request_body_limit: DEFAULT_REQUEST_BODY_LIMIT,
            cors: CorsConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| crate::Error::ConfigRead {
            path: path.to_owned(),
            source,
        })?;

        Ok(toml::from_str(&content)?)
    }
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub listen_address: SocketAddr,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            listen_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 9002)),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// The `Access-Control-Allow-Origin` value. Without it the request origin is mirrored.
    pub allow_origin: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// A directory with the pre-built editor, `index.html` included.
    pub assets_dir: Option<PathBuf>,
}
