use std::{fmt::Display, ops::Deref, path::PathBuf};

/// A configuration value that remembers where it came from.
///
/// Sources are reported in debug logs so a user can tell why a value was
/// picked. Only the *location* of a source is kept, never a copy of the raw
/// value, so secrets wrapped in `T` are not duplicated.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedProperty<T> {
    /// Value from a command line flag (value, flag name)
    Cli(T, &'static str),
    /// Value from an environment variable (value, variable name)
    Env(T, &'static str),
    /// Value from the configuration file (value, file path)
    File(T, PathBuf),
    /// Value parsed out of the configured service URL (value, url)
    Url(T, String),
    /// Value detected from the local git checkout (value, what was inspected)
    Git(T, String),
    /// Built-in default
    Default(T),
}

impl<T> ParsedProperty<T> {
    /// Get the parsed value
    pub fn value(&self) -> &T {
        match self {
            ParsedProperty::Cli(value, _)
            | ParsedProperty::Env(value, _)
            | ParsedProperty::File(value, _)
            | ParsedProperty::Url(value, _)
            | ParsedProperty::Git(value, _)
            | ParsedProperty::Default(value) => value,
        }
    }

    /// Consume the property and return the value
    pub fn into_value(self) -> T {
        match self {
            ParsedProperty::Cli(value, _)
            | ParsedProperty::Env(value, _)
            | ParsedProperty::File(value, _)
            | ParsedProperty::Url(value, _)
            | ParsedProperty::Git(value, _)
            | ParsedProperty::Default(value) => value,
        }
    }

    /// Get the source name as a string
    pub fn source_name(&self) -> &'static str {
        match self {
            ParsedProperty::Cli(_, _) => "cli",
            ParsedProperty::Env(_, _) => "env",
            ParsedProperty::File(_, _) => "file",
            ParsedProperty::Url(_, _) => "url",
            ParsedProperty::Git(_, _) => "git",
            ParsedProperty::Default(_) => "default",
        }
    }

    /// Describe the source, e.g. `env AZ_DEVOPS_TOKEN` or `file /home/me/.config/ado-pr/config.toml`
    pub fn describe_source(&self) -> String {
        match self {
            ParsedProperty::Cli(_, flag) => format!("cli --{flag}"),
            ParsedProperty::Env(_, var) => format!("env {var}"),
            ParsedProperty::File(_, path) => format!("file {}", path.display()),
            ParsedProperty::Url(_, url) => format!("url {url}"),
            ParsedProperty::Git(_, origin) => format!("git {origin}"),
            ParsedProperty::Default(_) => "default".to_string(),
        }
    }
}

impl<T> Deref for ParsedProperty<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value()
    }
}

impl<T: Display> Display for ParsedProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}
