//! Client configuration: defaults, then a TOML file, then environment.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::auth::{AccessToken, ClientIdentity};

pub const DEFAULT_CLIENT_NAME: &str = "jellyfin-rs";
pub const DEFAULT_DEVICE_NAME: &str = "jellyfin-rs";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid base URL `{value}`: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid timeout `{value}`: {source}")]
    InvalidDuration {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("invalid user id `{value}`: {source}")]
    InvalidUserId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("invalid boolean `{value}` for {name}; expected true/false, yes/no, on/off or 1/0")]
    InvalidBool { name: &'static str, value: String },

    #[error("no server configured; set `base_url` or JELLYFIN_BASE_URL")]
    MissingBaseUrl,
}

/// Parse a boolean value from a raw string, accepting common env-style forms.
///
/// Accepted truthy values (case-insensitive): `"1"`, `"true"`, `"yes"`, `"on"`.
/// Accepted falsy values: `"0"`, `"false"`, `"no"`, `"off"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Keys accepted in the TOML config file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileClientConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<AccessToken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<String>,
    /// Humantime duration, e.g. `"30s"` or `"1m 30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_invalid_certs: Option<bool>,
}

impl FileClientConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// Values read from `JELLYFIN_*` environment variables.
#[derive(Debug, Default, Clone)]
pub struct EnvClientConfig {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub access_token: Option<AccessToken>,
    pub user_id: Option<String>,
    pub client_name: Option<String>,
    pub device_name: Option<String>,
    pub device_id: Option<String>,
    pub client_version: Option<String>,
    pub timeout: Option<String>,
    pub accept_invalid_certs: Option<String>,
}

impl EnvClientConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());
        Self {
            config_path: var("JELLYFIN_CONFIG").map(PathBuf::from),
            base_url: var("JELLYFIN_BASE_URL"),
            access_token: var("JELLYFIN_ACCESS_TOKEN").map(AccessToken::from),
            user_id: var("JELLYFIN_USER_ID"),
            client_name: var("JELLYFIN_CLIENT_NAME"),
            device_name: var("JELLYFIN_DEVICE_NAME"),
            device_id: var("JELLYFIN_DEVICE_ID"),
            client_version: var("JELLYFIN_CLIENT_VERSION"),
            timeout: var("JELLYFIN_TIMEOUT"),
            accept_invalid_certs: var("JELLYFIN_ACCEPT_INVALID_CERTS"),
        }
    }
}

/// Fully resolved settings for [`crate::JellyfinClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub access_token: Option<AccessToken>,
    pub user_id: Option<Uuid>,
    pub identity: ClientIdentity,
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Defaults for everything but the server address.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            access_token: None,
            user_id: None,
            identity: ClientIdentity {
                client: DEFAULT_CLIENT_NAME.to_string(),
                device: DEFAULT_DEVICE_NAME.to_string(),
                device_id: Uuid::new_v4().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }

    pub fn with_access_token(mut self, token: impl Into<AccessToken>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Load `.env`, read the environment and the optional config file, and
    /// merge them. An explicit `path` wins over `JELLYFIN_CONFIG`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env");
        }
        let env = EnvClientConfig::gather();
        let path = path.map(Path::to_path_buf).or_else(|| env.config_path.clone());
        let file = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading client config");
                FileClientConfig::load(&path)?
            }
            None => FileClientConfig::default(),
        };
        Self::resolve(file, env)
    }

    /// Merge file and environment values; environment wins.
    pub fn resolve(
        file: FileClientConfig,
        env: EnvClientConfig,
    ) -> Result<Self, ConfigError> {
        let raw_url = env
            .base_url
            .or(file.base_url)
            .ok_or(ConfigError::MissingBaseUrl)?;
        let base_url = Url::parse(raw_url.trim()).map_err(|source| {
            ConfigError::InvalidUrl {
                value: raw_url.clone(),
                source,
            }
        })?;

        let mut config = Self::new(base_url);
        config.access_token = env.access_token.or(file.access_token);

        if let Some(raw) = env.user_id.or(file.user_id) {
            let user_id = Uuid::parse_str(raw.trim()).map_err(|source| {
                ConfigError::InvalidUserId {
                    value: raw.clone(),
                    source,
                }
            })?;
            config.user_id = Some(user_id);
        }

        if let Some(raw) = env.timeout.or(file.timeout) {
            config.timeout = humantime::parse_duration(raw.trim()).map_err(
                |source| ConfigError::InvalidDuration {
                    value: raw.clone(),
                    source,
                },
            )?;
        }

        let identity = &mut config.identity;
        if let Some(client) = env.client_name.or(file.client_name) {
            identity.client = client;
        }
        if let Some(device) = env.device_name.or(file.device_name) {
            identity.device = device;
        }
        if let Some(device_id) = env.device_id.or(file.device_id) {
            identity.device_id = device_id;
        }
        if let Some(version) = env.client_version.or(file.client_version) {
            identity.version = version;
        }

        let accept_invalid_certs = match env.accept_invalid_certs {
            Some(raw) => Some(parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                name: "JELLYFIN_ACCEPT_INVALID_CERTS",
                value: raw,
            })?),
            None => file.accept_invalid_certs,
        };
        config.accept_invalid_certs = accept_invalid_certs.unwrap_or(false);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvClientConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn parse_bool_accepts_env_forms() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn base_url_is_required() {
        let err = ClientConfig::resolve(FileClientConfig::default(), env(&[]))
            .expect_err("missing url");
        assert!(matches!(err, ConfigError::MissingBaseUrl));
    }

    #[test]
    fn defaults_fill_the_identity() {
        let config = ClientConfig::resolve(
            FileClientConfig::default(),
            env(&[("JELLYFIN_BASE_URL", "http://jellyfin.local:8096")]),
        )
        .expect("config");

        assert_eq!(config.base_url.as_str(), "http://jellyfin.local:8096/");
        assert_eq!(config.identity.client, DEFAULT_CLIENT_NAME);
        assert_eq!(config.identity.version, env!("CARGO_PKG_VERSION"));
        assert!(Uuid::parse_str(&config.identity.device_id).is_ok());
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!config.accept_invalid_certs);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn environment_overrides_file() {
        let file = FileClientConfig {
            base_url: Some("http://file.local".into()),
            device_name: Some("file-device".into()),
            timeout: Some("5s".into()),
            ..Default::default()
        };
        let config = ClientConfig::resolve(
            file,
            env(&[
                ("JELLYFIN_BASE_URL", "https://env.local/jellyfin"),
                ("JELLYFIN_TIMEOUT", "1m 30s"),
                ("JELLYFIN_ACCEPT_INVALID_CERTS", "yes"),
                ("JELLYFIN_DEVICE_NAME", ""),
            ]),
        )
        .expect("config");

        assert_eq!(config.base_url.as_str(), "https://env.local/jellyfin");
        assert_eq!(config.timeout, Duration::from_secs(90));
        assert!(config.accept_invalid_certs);
        // Blank variables do not shadow the file.
        assert_eq!(config.identity.device, "file-device");
    }

    #[test]
    fn invalid_values_are_reported() {
        let bad_url = ClientConfig::resolve(
            FileClientConfig::default(),
            env(&[("JELLYFIN_BASE_URL", "not a url")]),
        );
        assert!(matches!(bad_url, Err(ConfigError::InvalidUrl { .. })));

        let bad_timeout = ClientConfig::resolve(
            FileClientConfig::default(),
            env(&[
                ("JELLYFIN_BASE_URL", "http://x.local"),
                ("JELLYFIN_TIMEOUT", "soon"),
            ]),
        );
        assert!(matches!(
            bad_timeout,
            Err(ConfigError::InvalidDuration { .. })
        ));

        let bad_user = ClientConfig::resolve(
            FileClientConfig::default(),
            env(&[
                ("JELLYFIN_BASE_URL", "http://x.local"),
                ("JELLYFIN_USER_ID", "alice"),
            ]),
        );
        assert!(matches!(bad_user, Err(ConfigError::InvalidUserId { .. })));
    }

    #[test]
    fn unrecognised_boolean_is_an_error() {
        let file = FileClientConfig {
            base_url: Some("http://x.local".into()),
            accept_invalid_certs: Some(true),
            ..Default::default()
        };
        let err = ClientConfig::resolve(
            file,
            env(&[("JELLYFIN_ACCEPT_INVALID_CERTS", "maybe")]),
        )
        .expect_err("not a boolean");

        match err {
            ConfigError::InvalidBool { name, value } => {
                assert_eq!(name, "JELLYFIN_ACCEPT_INVALID_CERTS");
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other}"),
        }

        let off = ClientConfig::resolve(
            FileClientConfig {
                base_url: Some("http://x.local".into()),
                accept_invalid_certs: Some(true),
                ..Default::default()
            },
            env(&[("JELLYFIN_ACCEPT_INVALID_CERTS", "OFF")]),
        )
        .expect("config");
        assert!(!off.accept_invalid_certs);
    }

    #[test]
    fn toml_file_keys() {
        let file = FileClientConfig::parse(
            r#"
base_url = "http://den.local:8096"
access_token = "abc"
user_id = "11111111-1111-1111-1111-111111111111"
client_name = "openhab"
accept_invalid_certs = true
"#,
            Path::new("inline.toml"),
        )
        .expect("parse");

        let config = ClientConfig::resolve(file, env(&[])).expect("config");
        assert_eq!(config.identity.client, "openhab");
        assert_eq!(config.access_token, Some(AccessToken::new("abc")));
        assert_eq!(
            config.user_id.map(|id| id.to_string()).as_deref(),
            Some("11111111-1111-1111-1111-111111111111")
        );
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn unknown_toml_keys_are_rejected() {
        let err = FileClientConfig::parse("base_uri = \"x\"", Path::new("typo.toml"))
            .expect_err("typo");
        assert!(err.to_string().contains("typo.toml"));
    }

    #[test]
    fn debug_output_hides_the_token() {
        let config = ClientConfig::new(Url::parse("http://x.local").expect("url"))
            .with_access_token("s3cr3t");
        assert!(!format!("{config:?}").contains("s3cr3t"));
    }
}
