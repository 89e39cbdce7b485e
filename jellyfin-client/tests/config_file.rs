use std::io::Write as _;
use std::time::Duration;

use jellyfin_client::{
    AccessToken, ClientConfig, ConfigError, EnvClientConfig, FileClientConfig,
};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_every_key_from_toml() {
    let file = write_config(
        r#"
base_url = "https://media.example.net/jellyfin"
access_token = "0123456789abcdef"
user_id = "11111111-1111-1111-1111-111111111111"
client_name = "openhab"
device_name = "living-room"
device_id = "oh-1"
client_version = "4.2.0"
timeout = "45s"
accept_invalid_certs = false
"#,
    );

    let parsed = FileClientConfig::load(file.path()).expect("load");
    let config =
        ClientConfig::resolve(parsed, EnvClientConfig::default()).expect("resolve");

    assert_eq!(
        config.base_url.as_str(),
        "https://media.example.net/jellyfin"
    );
    assert_eq!(config.access_token, Some(AccessToken::new("0123456789abcdef")));
    assert_eq!(config.identity.client, "openhab");
    assert_eq!(config.identity.device, "living-room");
    assert_eq!(config.identity.device_id, "oh-1");
    assert_eq!(config.identity.version, "4.2.0");
    assert_eq!(config.timeout, Duration::from_secs(45));
    assert!(!config.accept_invalid_certs);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = FileClientConfig::load(&path).expect_err("missing");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn broken_toml_is_a_parse_error() {
    let file = write_config("base_url = ");
    let err = FileClientConfig::load(file.path()).expect_err("broken");
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn environment_token_replaces_file_token() {
    let file = write_config(
        r#"
base_url = "http://den.local:8096"
access_token = "from-file"
"#,
    );
    let parsed = FileClientConfig::load(file.path()).expect("load");
    let env = EnvClientConfig::from_lookup(|name| {
        (name == "JELLYFIN_ACCESS_TOKEN").then(|| "from-env".to_string())
    });

    let config = ClientConfig::resolve(parsed, env).expect("resolve");
    assert_eq!(config.access_token, Some(AccessToken::new("from-env")));
}
