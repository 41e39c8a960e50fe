use std::path::PathBuf;

use clap::Parser;
use faker_server::Config;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::LogLevel;

use self::log::LogStyle;

pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug, Parser)]
#[command(name = "graphql-faker", version)]
#[command(after_help = "Examples:

  # Mock a GraphQL API based on the example IDL and open the interactive editor
  graphql-faker --open

  # Serve read-only schemas from a directory, forwarding the authorization header
  graphql-faker -E false --schema-dir ./schemas --forward-headers Authorization")]
/// Mock a GraphQL API with fake data, editing its schema in the browser
pub(crate) struct Args {
    /// HTTP port
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
    /// Enable editing the schema. The ENABLE_EDIT_MODE environment variable takes precedence.
    #[arg(short = 'E', long)]
    pub enable_edit_mode: Option<bool>,
    /// Open the page with the IDL editor and GraphiQL in a browser
    #[arg(short, long)]
    pub open: bool,
    /// CORS: the Access-Control-Allow-Origin value, by default the Origin header of the request
    #[arg(long, visible_alias = "co")]
    pub cors_origin: Option<String>,
    /// Request headers made available to the fake resolvers
    #[arg(long, num_args = 1..)]
    pub forward_headers: Vec<String>,
    /// Directory holding one `<name>.graphql` file per schema
    #[arg(long, env = "GRAPHQL_FAKER_SCHEMA_DIR")]
    pub schema_dir: Option<PathBuf>,
    /// Directory with a pre-built editor bundle, served instead of the built-in editor
    #[arg(long)]
    pub editor_assets: Option<PathBuf>,
    /// Path to the TOML configuration file
    #[arg(long, short, env = "GRAPHQL_FAKER_CONFIG")]
    pub config: Option<PathBuf>,
    /// Set the logging level
    #[arg(long = "log", env = "GRAPHQL_FAKER_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "GRAPHQL_FAKER_LOG_STYLE", default_value_t = LogStyle::Text)]
    log_style: LogStyle,
}

pub(crate) fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// The configuration file, if any, with the command line and the environment applied on top.
    pub fn config(&self) -> anyhow::Result<Config> {
        let env_edit_mode = std::env::var("ENABLE_EDIT_MODE").ok();
        self.config_with_env(env_edit_mode.as_deref())
    }

    fn config_with_env(&self, env_edit_mode: Option<&str>) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(port) = self.port {
            config.network.listen_address.set_port(port);
        }

        if let Some(edit_mode) = env_edit_mode.map(parse_boolean).or(self.enable_edit_mode) {
            config.edit_mode = edit_mode;
        }

        if let Some(origin) = &self.cors_origin {
            config.cors.allow_origin = Some(origin.clone());
        }

        if !self.forward_headers.is_empty() {
            config.forward_headers.clone_from(&self.forward_headers);
        }

        if let Some(dir) = &self.schema_dir {
            config.schema_dir.clone_from(dir);
        }

        if let Some(dir) = &self.editor_assets {
            config.editor.assets_dir = Some(dir.clone());
        }

        Ok(config)
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn log_format<S>(&self) -> BoxedLayer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        let layer = tracing_subscriber::fmt::layer();

        match self.log_style {
            // for interactive terminals we provide colored output
            LogStyle::Text if atty::is(atty::Stream::Stdout) => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}

/// Anything but `false`, `0` and `no` is true.
fn parse_boolean(value: &str) -> bool {
    !(value.eq_ignore_ascii_case("false") || value == "0" || value.eq_ignore_ascii_case("no"))
}
