use std::fmt;

use clap::ValueEnum;

/// The crates of the faker itself, everything else is a dependency.
const FAKER_CRATES: &[&str] = &[
    "graphql_faker",
    "faker_server",
    "idl_store",
    "idl_editor",
    "schema_composer",
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, ValueEnum)]
pub(crate) enum LogLevel {
    /// Completely disables logging
    Off,
    /// Only errors from the faker
    Error,
    /// Warnings and errors from the faker
    Warn,
    /// Info, warning and error messages from the faker
    #[default]
    Info,
    /// Debug, info, warning and error messages from the faker
    Debug,
    /// Trace, debug, info, warning and error messages from all dependencies
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_string(&self) -> String {
        match self {
            LogLevel::Off => "off".to_owned(),
            LogLevel::Trace => "trace".to_owned(),
            level => {
                let mut directives: Vec<String> = FAKER_CRATES.iter().map(|name| format!("{name}={level}")).collect();
                directives.push("off".to_owned());
                directives.join(",")
            }
        }
    }
}

impl AsRef<str> for LogLevel {
    fn as_ref(&self) -> &str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogStyle {
    /// Standard text
    Text,
    /// JSON objects
    Json,
}

impl AsRef<str> for LogStyle {
    fn as_ref(&self) -> &str {
        match self {
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
