//! Configuration management for ado-pr.
//!
//! Connection settings are layered from several sources, highest precedence
//! first:
//!
//! 1. Command line flags (`--token`, `--az-url`, `--project`)
//! 2. Environment variables (`AZ_DEVOPS_TOKEN`, `AZ_DEVOPS_URL`, `AZ_DEVOPS_PROJECT`)
//! 3. TOML configuration file following the XDG Base Directory specification
//! 4. Built-in defaults
//!
//! When no project is configured explicitly it is taken from the service URL
//! (`https://dev.azure.com/<org>/<project>`) or, failing that, from the
//! Azure DevOps `origin` remote of the working directory.
//!
//! ## Example
//!
//! ```rust
//! use ado_pr::Config;
//! use ado_pr::parsed_property::ParsedProperty;
//!
//! let env = Config::load_from_env_with(|var| match var {
//!     "AZ_DEVOPS_TOKEN" => Some("my-pat".to_string()),
//!     "AZ_DEVOPS_URL" => Some("https://dev.azure.com/myorg/myproject".to_string()),
//!     _ => None,
//! });
//! let settings = Config::default().merge(env).resolve(|| None).unwrap();
//!
//! assert_eq!(settings.organization, "myorg");
//! assert_eq!(settings.project.value(), "myproject");
//! ```

use crate::{error::ConfigError, models::ConnectionArgs, parsed_property::ParsedProperty};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Service URL used when none is configured.
pub const DEFAULT_AZ_URL: &str = "https://dev.azure.com/kev0709";

const CLOUD_HOST: &str = "dev.azure.com";
const CLOUD_ENDPOINT: &str = "https://dev.azure.com";

pub const TOKEN_ENV: &str = "AZ_DEVOPS_TOKEN";
pub const URL_ENV: &str = "AZ_DEVOPS_URL";
pub const PROJECT_ENV: &str = "AZ_DEVOPS_PROJECT";

/// Temporary struct for deserializing TOML configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    token: Option<String>,
    az_url: Option<String>,
    project: Option<String>,
}

/// Layered, not yet validated configuration.
#[derive(Debug)]
pub struct Config {
    /// Personal access token for authenticating with Azure DevOps.
    pub token: Option<ParsedProperty<SecretString>>,
    /// Base service URL including the organization, e.g. `https://dev.azure.com/myorg`.
    pub az_url: Option<ParsedProperty<String>>,
    /// Azure DevOps project name.
    pub project: Option<ParsedProperty<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: None,
            az_url: Some(ParsedProperty::Default(DEFAULT_AZ_URL.to_string())),
            project: None,
        }
    }
}

/// Validated settings needed to build the Azure DevOps client.
#[derive(Debug)]
pub struct ConnectionSettings {
    pub token: SecretString,
    /// Service root the organization is appended to, e.g. `https://dev.azure.com/`.
    pub endpoint: Url,
    pub organization: String,
    pub project: ParsedProperty<String>,
}

/// A service URL split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl {
    pub endpoint: Url,
    pub organization: String,
    pub project: Option<String>,
}

impl Config {
    /// Build a layer from command line flags.
    pub fn from_connection_args(args: &ConnectionArgs) -> Self {
        Self {
            token: args
                .token
                .clone()
                .map(|v| ParsedProperty::Cli(SecretString::from(v), "token")),
            az_url: args
                .az_url
                .clone()
                .map(|v| ParsedProperty::Cli(v, "az-url")),
            project: args
                .project
                .clone()
                .map(|v| ParsedProperty::Cli(v, "project")),
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env() -> Self {
        Self::load_from_env_with(|var| std::env::var(var).ok())
    }

    /// Load configuration from environment variables through `lookup`.
    pub fn load_from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            token: lookup(TOKEN_ENV).map(|v| ParsedProperty::Env(SecretString::from(v), TOKEN_ENV)),
            az_url: lookup(URL_ENV).map(|v| ParsedProperty::Env(v, URL_ENV)),
            project: lookup(PROJECT_ENV).map(|v| ParsedProperty::Env(v, PROJECT_ENV)),
        }
    }

    /// Load configuration from the XDG config directory.
    ///
    /// A missing file yields an empty layer.
    pub fn load_from_file() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::empty()),
        }
    }

    /// Load configuration from a TOML file at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::empty());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self {
            token: file
                .token
                .map(|v| ParsedProperty::File(SecretString::from(v), path.to_path_buf())),
            az_url: file
                .az_url
                .map(|v| ParsedProperty::File(v, path.to_path_buf())),
            project: file
                .project
                .map(|v| ParsedProperty::File(v, path.to_path_buf())),
        })
    }

    /// A layer without any values.
    pub fn empty() -> Self {
        Self {
            token: None,
            az_url: None,
            project: None,
        }
    }

    /// Merge this config with another, preferring values from other when they exist
    pub fn merge(self, other: Self) -> Self {
        Self {
            token: other.token.or(self.token),
            az_url: other.az_url.or(self.az_url),
            project: other.project.or(self.project),
        }
    }

    /// Layer defaults, config file, environment and command line flags.
    pub fn layered(args: &ConnectionArgs) -> Result<Self, ConfigError> {
        Ok(Self::default()
            .merge(Self::load_from_file()?)
            .merge(Self::load_from_env())
            .merge(Self::from_connection_args(args)))
    }

    /// Validate the layered values.
    ///
    /// `detect_project` is only consulted when neither an explicit project nor
    /// a project segment in the service URL is available.
    pub fn resolve(
        self,
        detect_project: impl FnOnce() -> Option<ParsedProperty<String>>,
    ) -> Result<ConnectionSettings, ConfigError> {
        let token = self
            .token
            .filter(|t| !t.expose_secret().trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired {
                field: "token".to_string(),
                env_var: TOKEN_ENV.to_string(),
            })?;

        let az_url = self
            .az_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired {
                field: "az-url".to_string(),
                env_var: URL_ENV.to_string(),
            })?;

        let service = parse_service_url(&az_url)?;
        tracing::debug!(
            organization = %service.organization,
            source = %az_url.describe_source(),
            "resolved service url"
        );
        tracing::debug!(source = %token.describe_source(), "resolved token");

        let project = self
            .project
            .filter(|p| !p.trim().is_empty())
            .or_else(|| {
                service
                    .project
                    .clone()
                    .map(|p| ParsedProperty::Url(p, az_url.value().clone()))
            })
            .or_else(detect_project)
            .ok_or_else(|| ConfigError::MissingRequired {
                field: "project".to_string(),
                env_var: PROJECT_ENV.to_string(),
            })?;
        tracing::debug!(project = %project, source = %project.describe_source(), "resolved project");

        Ok(ConnectionSettings {
            token: token.into_value(),
            endpoint: service.endpoint,
            organization: service.organization,
            project,
        })
    }

    /// Get the XDG config file path for ado-pr
    pub fn config_path() -> Option<PathBuf> {
        config_path_from(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
    }

    /// Create a sample config file for user reference.
    ///
    /// Returns the path of the file, or `None` when a config file already exists.
    pub fn create_sample_config() -> Result<Option<PathBuf>, ConfigError> {
        let path = Self::config_path().ok_or_else(|| ConfigError::InvalidValue {
            field: "config path".to_string(),
            message: "could not determine home directory".to_string(),
        })?;
        create_sample_config_at(&path)
    }
}

/// Split a service URL into endpoint, organization and optional project.
///
/// Three shapes are understood:
/// - `https://dev.azure.com/<org>[/<project>]`
/// - `https://<org>.visualstudio.com[/DefaultCollection][/<project>]`, served
///   from the `dev.azure.com` endpoint
/// - `https://<server>[/<prefix>...]/<collection>` for on-premises servers,
///   where the collection takes the place of the organization
pub fn parse_service_url(raw: &str) -> Result<ServiceUrl, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        field: "az-url".to_string(),
        message: format!("{message} ({raw})"),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https URL"));
    }

    let mut segments: Vec<String> = url
        .path_segments()
        .map(|s| s.filter(|s| !s.is_empty()).map(str::to_string).collect())
        .unwrap_or_default();
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();

    if let Some(organization) = host.strip_suffix(".visualstudio.com") {
        let organization = organization.split('.').next().unwrap_or_default();
        if organization.is_empty() {
            return Err(invalid("missing organization in host"));
        }
        if segments
            .first()
            .is_some_and(|s| s.eq_ignore_ascii_case("DefaultCollection"))
        {
            segments.remove(0);
        }
        let endpoint = Url::parse(CLOUD_ENDPOINT).map_err(|e| invalid(&e.to_string()))?;
        return Ok(ServiceUrl {
            endpoint,
            organization: organization.to_string(),
            project: segments.into_iter().next(),
        });
    }

    let mut endpoint = url;
    endpoint.set_query(None);
    endpoint.set_fragment(None);

    if host == CLOUD_HOST {
        let mut segments = segments.into_iter();
        let organization = segments
            .next()
            .ok_or_else(|| invalid("missing organization in path"))?;
        endpoint.set_path("");
        return Ok(ServiceUrl {
            endpoint,
            organization,
            project: segments.next(),
        });
    }

    let organization = segments
        .pop()
        .ok_or_else(|| invalid("missing collection in path"))?;
    endpoint.set_path(&segments.join("/"));
    Ok(ServiceUrl {
        endpoint,
        organization,
        project: None,
    })
}

fn config_path_from(xdg_config_home: Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
    let config_dir = xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".config")))?;
    Some(config_dir.join("ado-pr").join("config.toml"))
}

const SAMPLE_CONFIG: &str = r#"# ado-pr Configuration File
# Location: ~/.config/ado-pr/config.toml (or $XDG_CONFIG_HOME/ado-pr/config.toml)
#
# Every value can be overridden by an environment variable or a command line flag.

# Personal Access Token (consider using the AZ_DEVOPS_TOKEN environment variable instead)
# token = "your-pat-token"

# Base Azure DevOps URL including the organization, optionally followed by the project
# az_url = "https://dev.azure.com/your-organization"

# Azure DevOps project (optional when part of az_url or detectable from the git remote)
# project = "your-project"
"#;

fn create_sample_config_at(path: &Path) -> Result<Option<PathBuf>, ConfigError> {
    // Don't overwrite existing config
    if path.exists() {
        return Ok(None);
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| ConfigError::DirectoryCreationError {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    fs::write(path, SAMPLE_CONFIG).map_err(|e| ConfigError::FileReadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_of(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from_env_with(|var| map.get(var).cloned())
    }

    /// # Config Default
    ///
    /// Tests the built-in defaults.
    ///
    /// ## Test Scenario
    /// - Creates a default configuration
    ///
    /// ## Expected Outcome
    /// - Only the service URL has a default
    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.token.is_none());
        assert!(config.project.is_none());
        assert_eq!(
            config.az_url,
            Some(ParsedProperty::Default(DEFAULT_AZ_URL.to_string()))
        );
    }

    /// # Load From Env
    ///
    /// Tests loading every variable from the environment.
    ///
    /// ## Test Scenario
    /// - Provides all three variables through the lookup
    ///
    /// ## Expected Outcome
    /// - Each value is an Env property naming its variable
    #[test]
    fn test_load_from_env_all_variables() {
        let config = env_of(&[
            (TOKEN_ENV, "env-pat"),
            (URL_ENV, "https://dev.azure.com/env-org"),
            (PROJECT_ENV, "env-project"),
        ]);

        let token = config.token.unwrap();
        assert_eq!(token.expose_secret(), "env-pat");
        assert_eq!(token.describe_source(), "env AZ_DEVOPS_TOKEN");
        assert_eq!(
            config.az_url,
            Some(ParsedProperty::Env(
                "https://dev.azure.com/env-org".to_string(),
                URL_ENV
            ))
        );
        assert_eq!(
            config.project,
            Some(ParsedProperty::Env("env-project".to_string(), PROJECT_ENV))
        );
    }

    /// # Merge Precedence
    ///
    /// Tests that later layers override earlier ones field by field.
    ///
    /// ## Test Scenario
    /// - Merges defaults, an env layer and a CLI layer
    ///
    /// ## Expected Outcome
    /// - CLI wins over env, env wins over defaults, unset fields fall through
    #[test]
    fn test_merge_precedence() {
        let env = env_of(&[(TOKEN_ENV, "env-pat"), (PROJECT_ENV, "env-project")]);
        let cli = Config::from_connection_args(&ConnectionArgs {
            token: Some("cli-pat".to_string()),
            az_url: None,
            project: None,
        });

        let merged = Config::default().merge(env).merge(cli);

        let token = merged.token.unwrap();
        assert_eq!(token.expose_secret(), "cli-pat");
        assert_eq!(token.source_name(), "cli");
        assert_eq!(merged.project.unwrap().source_name(), "env");
        assert_eq!(merged.az_url.unwrap().source_name(), "default");
    }

    /// # Resolve Requires Token
    ///
    /// Tests that a missing or blank token is a configuration error.
    ///
    /// ## Test Scenario
    /// - Resolves defaults without a token, and with a blank token
    ///
    /// ## Expected Outcome
    /// - MissingRequired for the token field in both cases
    #[test]
    fn test_resolve_requires_token() {
        let err = Config::default().resolve(|| None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { ref field, .. } if field == "token"
        ));

        let blank = Config::default().merge(env_of(&[(TOKEN_ENV, "  ")]));
        assert!(matches!(
            blank.resolve(|| None).unwrap_err(),
            ConfigError::MissingRequired { ref field, .. } if field == "token"
        ));
    }

    /// # Resolve Requires Service URL
    ///
    /// Tests that an empty service URL is a configuration error.
    ///
    /// ## Test Scenario
    /// - Overrides the default URL with an empty CLI value
    ///
    /// ## Expected Outcome
    /// - MissingRequired for the az-url field
    #[test]
    fn test_resolve_requires_url() {
        let config = Config::default().merge(Config::from_connection_args(&ConnectionArgs {
            token: Some("pat".to_string()),
            az_url: Some(String::new()),
            project: Some("proj".to_string()),
        }));

        assert!(matches!(
            config.resolve(|| None).unwrap_err(),
            ConfigError::MissingRequired { ref field, .. } if field == "az-url"
        ));
    }

    /// # Project Fallback Order
    ///
    /// Tests where the project comes from when not set explicitly.
    ///
    /// ## Test Scenario
    /// - Explicit project with a URL project segment
    /// - URL project segment only
    /// - No project anywhere except the git detection
    /// - No project at all
    ///
    /// ## Expected Outcome
    /// - Explicit wins, then URL, then git; nothing yields MissingRequired
    #[test]
    fn test_project_fallback_order() {
        let explicit = env_of(&[
            (TOKEN_ENV, "pat"),
            (URL_ENV, "https://dev.azure.com/org/url-project"),
            (PROJECT_ENV, "env-project"),
        ])
        .resolve(|| panic!("git detection must not run"))
        .unwrap();
        assert_eq!(explicit.project.value(), "env-project");

        let from_url = env_of(&[
            (TOKEN_ENV, "pat"),
            (URL_ENV, "https://dev.azure.com/org/url-project"),
        ])
        .resolve(|| panic!("git detection must not run"))
        .unwrap();
        assert_eq!(from_url.project.value(), "url-project");
        assert_eq!(from_url.project.source_name(), "url");

        let from_git = env_of(&[(TOKEN_ENV, "pat"), (URL_ENV, "https://dev.azure.com/org")])
            .resolve(|| {
                Some(ParsedProperty::Git(
                    "git-project".to_string(),
                    "git@ssh.dev.azure.com:v3/org/git-project/repo".to_string(),
                ))
            })
            .unwrap();
        assert_eq!(from_git.project.value(), "git-project");

        let missing = env_of(&[(TOKEN_ENV, "pat"), (URL_ENV, "https://dev.azure.com/org")])
            .resolve(|| None)
            .unwrap_err();
        assert!(matches!(
            missing,
            ConfigError::MissingRequired { ref field, .. } if field == "project"
        ));
    }

    /// # Parse Service URL
    ///
    /// Tests splitting service URLs into endpoint, organization and project.
    ///
    /// ## Test Scenario
    /// - Parses URLs with and without a project, with a trailing slash
    ///
    /// ## Expected Outcome
    /// - Endpoint keeps only scheme and host
    #[test]
    fn test_parse_service_url() {
        let plain = parse_service_url("https://dev.azure.com/kev0709").unwrap();
        assert_eq!(plain.endpoint.as_str(), "https://dev.azure.com/");
        assert_eq!(plain.organization, "kev0709");
        assert_eq!(plain.project, None);

        let with_project = parse_service_url("https://dev.azure.com/org/My-Project/").unwrap();
        assert_eq!(with_project.organization, "org");
        assert_eq!(with_project.project.as_deref(), Some("My-Project"));

        let server = parse_service_url("https://ado.example.com:8443/collection").unwrap();
        assert_eq!(server.endpoint.as_str(), "https://ado.example.com:8443/");
        assert_eq!(server.organization, "collection");
    }

    /// # Parse Visual Studio Service URL
    ///
    /// Tests the legacy `<org>.visualstudio.com` URL shape.
    ///
    /// ## Test Scenario
    /// - Parses the bare organization URL, one with a project and one with
    ///   the `DefaultCollection` prefix
    ///
    /// ## Expected Outcome
    /// - The organization comes from the subdomain
    /// - Requests go to the dev.azure.com endpoint
    #[test]
    fn test_parse_visualstudio_service_url() {
        let bare = parse_service_url("https://kev0709.visualstudio.com").unwrap();
        assert_eq!(bare.endpoint.as_str(), "https://dev.azure.com/");
        assert_eq!(bare.organization, "kev0709");
        assert_eq!(bare.project, None);

        let with_project = parse_service_url("https://Org.VisualStudio.com/Proj/").unwrap();
        assert_eq!(with_project.organization, "org");
        assert_eq!(with_project.project.as_deref(), Some("Proj"));

        let legacy =
            parse_service_url("https://org.visualstudio.com/DefaultCollection/Proj").unwrap();
        assert_eq!(legacy.organization, "org");
        assert_eq!(legacy.project.as_deref(), Some("Proj"));
    }

    /// # Parse On-Premises Service URL
    ///
    /// Tests collection URLs of an on-premises server.
    ///
    /// ## Test Scenario
    /// - Parses a collection behind a virtual directory, with a query string
    ///
    /// ## Expected Outcome
    /// - The last path segment is the collection
    /// - The endpoint keeps the virtual directory
    #[test]
    fn test_parse_on_premises_service_url() {
        let server =
            parse_service_url("https://tfs.example.com/tfs/DefaultCollection?x=1").unwrap();
        assert_eq!(server.endpoint.as_str(), "https://tfs.example.com/tfs");
        assert_eq!(server.organization, "DefaultCollection");
        assert_eq!(server.project, None);
    }

    /// # Resolve Visual Studio URL
    ///
    /// Tests connection settings for a `visualstudio.com` URL with an explicit project.
    ///
    /// ## Test Scenario
    /// - Token and URL from the environment, project from the command line
    ///
    /// ## Expected Outcome
    /// - Settings target the organization from the subdomain
    #[test]
    fn test_resolve_visualstudio_url() {
        let config = env_of(&[
            (TOKEN_ENV, "pat"),
            (URL_ENV, "https://kev0709.visualstudio.com"),
        ])
        .merge(Config {
            project: Some(ParsedProperty::Cli("proj".to_string(), "project")),
            ..Config::empty()
        });

        let settings = config.resolve(|| None).unwrap();
        assert_eq!(settings.organization, "kev0709");
        assert_eq!(settings.endpoint.as_str(), "https://dev.azure.com/");
        assert_eq!(settings.project.value(), "proj");
    }

    /// # Parse Invalid Service URL
    ///
    /// Tests rejection of malformed service URLs.
    ///
    /// ## Test Scenario
    /// - Parses a relative string, URLs without organization or collection
    ///   and a non-http URL
    ///
    /// ## Expected Outcome
    /// - InvalidValue for the az-url field
    #[test]
    fn test_parse_invalid_service_url() {
        for raw in [
            "not a url",
            "https://dev.azure.com",
            "ftp://dev.azure.com/org",
            "https://tfs.example.com/",
        ] {
            assert!(
                matches!(
                    parse_service_url(raw),
                    Err(ConfigError::InvalidValue { ref field, .. }) if field == "az-url"
                ),
                "{raw} should be rejected"
            );
        }
    }

    /// # Load From File
    ///
    /// Tests loading a valid TOML configuration file.
    ///
    /// ## Test Scenario
    /// - Writes a config file with all keys and loads it
    ///
    /// ## Expected Outcome
    /// - Every value is a File property pointing at the file
    #[test]
    fn test_load_from_file_valid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
token = "file-pat"
az_url = "https://dev.azure.com/file-org"
project = "file-project"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.token.unwrap().expose_secret(), "file-pat");
        assert_eq!(
            config.az_url,
            Some(ParsedProperty::File(
                "https://dev.azure.com/file-org".to_string(),
                path.clone()
            ))
        );
        assert_eq!(
            config.project,
            Some(ParsedProperty::File("file-project".to_string(), path))
        );
    }

    /// # Load From Missing File
    ///
    /// Tests that a missing config file is not an error.
    ///
    /// ## Test Scenario
    /// - Loads a path that does not exist
    ///
    /// ## Expected Outcome
    /// - An empty layer is returned
    #[test]
    fn test_load_from_file_missing_file_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(&temp_dir.path().join("missing.toml")).unwrap();
        assert!(config.token.is_none());
        assert!(config.az_url.is_none());
        assert!(config.project.is_none());
    }

    /// # Load From Invalid File
    ///
    /// Tests that malformed TOML is reported as a parse error.
    ///
    /// ## Test Scenario
    /// - Writes invalid TOML and an unknown key
    ///
    /// ## Expected Outcome
    /// - ParseError naming the file
    #[test]
    fn test_load_from_file_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "token = ").unwrap();
        assert!(matches!(
            Config::load_from_path(&path),
            Err(ConfigError::ParseError { .. })
        ));

        fs::write(&path, "pat = \"old-key\"").unwrap();
        assert!(matches!(
            Config::load_from_path(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    /// # Config Path
    ///
    /// Tests the XDG config path computation.
    ///
    /// ## Test Scenario
    /// - Computes the path with XDG_CONFIG_HOME, with only a home directory, and with neither
    ///
    /// ## Expected Outcome
    /// - XDG_CONFIG_HOME wins, home falls back to ~/.config, neither yields None
    #[test]
    fn test_config_path_from() {
        assert_eq!(
            config_path_from(Some("/xdg".to_string()), Some(PathBuf::from("/home/me"))),
            Some(PathBuf::from("/xdg/ado-pr/config.toml"))
        );
        assert_eq!(
            config_path_from(None, Some(PathBuf::from("/home/me"))),
            Some(PathBuf::from("/home/me/.config/ado-pr/config.toml"))
        );
        assert_eq!(
            config_path_from(Some(String::new()), Some(PathBuf::from("/home/me"))),
            Some(PathBuf::from("/home/me/.config/ado-pr/config.toml"))
        );
        assert_eq!(config_path_from(None, None), None);
    }

    /// # Create Sample Config
    ///
    /// Tests writing the sample config and not overwriting an existing one.
    ///
    /// ## Test Scenario
    /// - Creates the sample in a fresh directory, then again
    ///
    /// ## Expected Outcome
    /// - First call writes a loadable file, second call leaves it alone
    #[test]
    fn test_create_sample_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ado-pr").join("config.toml");

        let created = create_sample_config_at(&path).unwrap();
        assert_eq!(created, Some(path.clone()));

        let loaded = Config::load_from_path(&path).unwrap();
        assert!(loaded.token.is_none());

        fs::write(&path, "project = \"mine\"").unwrap();
        assert_eq!(create_sample_config_at(&path).unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "project = \"mine\"");
    }
}
