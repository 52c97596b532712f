use super::{apply_config, load_config_file, types::DurationValue};
use clap::{CommandFactory, FromArgMatches};
use std::time::Duration;
use tempfile::tempdir;

use crate::args::VolleyArgs;

fn parse_with_matches(values: &[&str]) -> Result<(VolleyArgs, clap::ArgMatches), String> {
    let matches = VolleyArgs::command()
        .try_get_matches_from(values)
        .map_err(|err| err.to_string())?;
    let args = VolleyArgs::from_arg_matches(&matches).map_err(|err| err.to_string())?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    let content = r#"
payload_file = "test/payload.txt"
target = "http://localhost:18020"
concurrency = 8
timeout = "750ms"
output = "out.txt"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.payload_file.as_deref() != Some("test/payload.txt") {
        return Err("Unexpected payload_file".to_owned());
    }
    if config.concurrency != Some(8) {
        return Err("Unexpected concurrency".to_owned());
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?
        .to_duration()
        .map_err(|err| err.to_string())?;
    if timeout != Duration::from_millis(750) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_aliases() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.json");
    let content = r#"{"payloads": "p.txt", "url": "http://example.com", "workers": 3, "timeout": 20}"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.payload_file.as_deref() != Some("p.txt")
        || config.target.as_deref() != Some("http://example.com")
        || config.concurrency != Some(3)
    {
        return Err(format!("Unexpected config: {:?}", config));
    }
    if !matches!(config.timeout, Some(DurationValue::Seconds(20))) {
        return Err(format!("Unexpected timeout: {:?}", config.timeout));
    }
    Ok(())
}

#[test]
fn unsupported_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.yaml");
    std::fs::write(&path, "target: x").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected yaml config to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    std::fs::write(&path, "retries = 3\n").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unknown key to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn cli_values_take_precedence_over_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    let content = r#"
payload_file = "from-config.txt"
target = "http://config.local"
concurrency = 9
timeout = 3
route = "/v2/find"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;

    let (mut args, matches) =
        parse_with_matches(&["volley", "from-cli.txt", "http://cli.local", "2"])?;
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.payload_file.as_deref() != Some("from-cli.txt")
        || args.target.as_deref() != Some("http://cli.local")
        || args.concurrency.get() != 2
    {
        return Err(format!("CLI values were overridden: {:?}", args));
    }
    if args.request_timeout != Duration::from_secs(3) || args.route != "/v2/find" {
        return Err(format!("Config values were not applied: {:?}", args));
    }

    let (mut args, matches) = parse_with_matches(&["volley", "--config", "volley.toml"])?;
    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;
    if args.payload_file.as_deref() != Some("from-config.txt") || args.concurrency.get() != 9 {
        return Err(format!("Config values were not applied: {:?}", args));
    }
    Ok(())
}

#[test]
fn zero_concurrency_in_config_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("volley.toml");
    std::fs::write(&path, "concurrency = 0\n").map_err(|err| format!("write failed: {}", err))?;
    let config = load_config_file(&path).map_err(|err| err.to_string())?;

    let (mut args, matches) = parse_with_matches(&["volley", "p.txt", "http://localhost"])?;
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected zero concurrency to be rejected".to_owned());
    }
    Ok(())
}
