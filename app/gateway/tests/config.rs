//! Gateway configuration tests.

use gabble_gateway::GatewayConfig;

#[test]
fn parse_minimal_config() {
    let toml = r#"
[llm]
model = "gemini-2.5-pro"
api_key = "test-key"
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.llm.model.as_str(), "gemini-2.5-pro");
    assert_eq!(config.llm.api_key, "test-key");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
}

#[test]
fn parse_full_config() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 3000

[llm]
model = "gemini-2.5-pro"
api_key = "test-key"
base_url = "http://localhost:9090/v1beta/models"

[context]
preamble_path = "prompts/system.txt"
max_length = 50000

[session]
ttl_secs = 600
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(
        config.llm.base_url.as_deref(),
        Some("http://localhost:9090/v1beta/models")
    );
    assert_eq!(config.context.preamble_path, "prompts/system.txt");
    assert_eq!(config.context.max_length, 50000);
    assert_eq!(config.session.ttl_secs, 600);
}

#[test]
fn empty_config_uses_defaults() {
    let config = GatewayConfig::from_toml("").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.llm.model.as_str(), "gemini-2.0-flash");
    assert_eq!(config.context.preamble_path, "system_prompt.txt");
    assert_eq!(config.context.max_length, 1_000_000);
    assert_eq!(config.session.ttl_secs, 3600);
    assert!(config.llm.base_url.is_none());
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(GatewayConfig::from_toml("[llm\nmodel = ").is_err());
}

#[test]
fn bind_address() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
}

#[test]
fn env_var_expansion() {
    unsafe { std::env::set_var("TEST_GABBLE_KEY", "expanded-value") };
    let toml = r#"
[llm]
model = "gemini-2.5-pro"
api_key = "${TEST_GABBLE_KEY}"
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.llm.api_key, "expanded-value");
    unsafe { std::env::remove_var("TEST_GABBLE_KEY") };
}

#[test]
fn unset_env_var_expands_to_empty_key() {
    let toml = r#"
[llm]
model = "gemini-2.5-pro"
api_key = "${TEST_GABBLE_UNSET_KEY}"
"#;
    let config = GatewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.llm.api_key, "");
}

#[test]
fn load_reads_config_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gabble.toml");
    std::fs::write(&path, "[llm]\nmodel = \"gemini-2.5-pro\"\n").unwrap();

    let config = GatewayConfig::load(&path).unwrap();
    assert_eq!(config.llm.model.as_str(), "gemini-2.5-pro");
}

#[test]
fn load_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(GatewayConfig::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn preamble_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_prompt.txt");
    std::fs::write(&path, "You are a helpful assistant.\n").unwrap();

    let mut config = GatewayConfig::default();
    config.context.preamble_path = path.to_str().unwrap().to_owned();
    assert_eq!(config.load_preamble().unwrap(), "You are a helpful assistant.\n");
}

#[test]
fn missing_preamble_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = GatewayConfig::default();
    config.context.preamble_path = dir.path().join("absent.txt").to_str().unwrap().to_owned();
    assert!(config.load_preamble().is_err());
}

#[test]
fn empty_preamble_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_prompt.txt");
    std::fs::write(&path, "").unwrap();

    let mut config = GatewayConfig::default();
    config.context.preamble_path = path.to_str().unwrap().to_owned();
    assert!(config.load_preamble().is_err());
}

#[test]
fn rust_log_style_directives_parse() {
    // The binary builds its log filter from RUST_LOG-style directives.
    let filter = tracing_subscriber::EnvFilter::try_new("info,gabble_gateway=debug").unwrap();
    assert!(filter.to_string().contains("gabble_gateway=debug"));
}
