//! The `MediaBrowser` authorization scheme.
//!
//! Jellyfin identifies every caller by client name, device and version, and
//! carries the access token in the same header:
//!
//! ```text
//! MediaBrowser Client="jellyfin-rs", Device="den", DeviceId="...", Version="0.1.0", Token="..."
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// API key or session token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// How this client introduces itself to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub client: String,
    pub device: String,
    pub device_id: String,
    pub version: String,
}

impl ClientIdentity {
    /// Value of the `Authorization` header, with the token if one is set.
    pub fn authorization(&self, token: Option<&AccessToken>) -> String {
        let mut header = format!(
            "MediaBrowser Client=\"{}\", Device=\"{}\", DeviceId=\"{}\", Version=\"{}\"",
            escape(&self.client),
            escape(&self.device),
            escape(&self.device_id),
            escape(&self.version),
        );
        if let Some(token) = token {
            header.push_str(&format!(", Token=\"{}\"", escape(token.expose())));
        }
        header
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> ClientIdentity {
        ClientIdentity {
            client: "jellyfin-rs".into(),
            device: "den".into(),
            device_id: "abc-123".into(),
            version: "0.1.0".into(),
        }
    }

    #[test]
    fn header_without_token() {
        assert_eq!(
            identity().authorization(None),
            r#"MediaBrowser Client="jellyfin-rs", Device="den", DeviceId="abc-123", Version="0.1.0""#
        );
    }

    #[test]
    fn header_with_token_and_quotes() {
        let mut identity = identity();
        identity.device = "Bob's \"TV\"".into();
        let token = AccessToken::new("s3cr3t");

        assert_eq!(
            identity.authorization(Some(&token)),
            r#"MediaBrowser Client="jellyfin-rs", Device="Bob's \"TV\"", DeviceId="abc-123", Version="0.1.0", Token="s3cr3t""#
        );
    }

    #[test]
    fn debug_redacts_token() {
        let token = AccessToken::new("s3cr3t");
        assert!(!format!("{token:?}").contains("s3cr3t"));
    }
}
