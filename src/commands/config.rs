//! Configuration commands (`corkboard config`)
//!
//! - `config show`: display the resolved configuration
//! - `config get`: read a single value
//! - `config set`: write a value to the config file

use owo_colors::OwoColorize;
use serde_json::json;
use url::Url;

use super::print_json;
use crate::config::{Config, DEFAULT_ENDPOINT};
use crate::error::{CorkboardError, Result};

const VALID_KEYS: &[&str] = &["endpoint", "api_key"];

/// Validate a config key, suggesting the underscore spelling for dashed input
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }

    let underscored = key.replace('-', "_");
    if VALID_KEYS.contains(&underscored.as_str()) {
        return Err(CorkboardError::Config(format!(
            "invalid config key '{key}'. Did you mean '{underscored}'?"
        )));
    }

    Err(CorkboardError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    )))
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;

    let endpoint = config.endpoint();
    let endpoint_is_default = endpoint == DEFAULT_ENDPOINT;
    let api_key_configured = config.api_key().is_some();
    let config_file = Config::config_path().map(|p| p.display().to_string());

    if json {
        return print_json(&json!({
            "endpoint": endpoint,
            "endpoint_is_default": endpoint_is_default,
            "api_key_configured": api_key_configured,
            "config_file": config_file,
        }));
    }

    println!("{}", "Configuration:".cyan().bold());
    println!();

    if endpoint_is_default {
        println!("{}: {endpoint} {}", "endpoint".cyan(), "(default)".dimmed());
    } else {
        println!("{}: {endpoint}", "endpoint".cyan());
    }

    let api_status = if api_key_configured {
        "configured".green().to_string()
    } else {
        "not configured".dimmed().to_string()
    };
    println!("{}: {api_status}", "api_key".cyan());

    println!();
    match config_file {
        Some(path) => println!("{}", format!("Config file: {path}").dimmed()),
        None => println!("{}", "Config file: unavailable on this platform".dimmed()),
    }

    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let key = validate_config_key(key)?;

    let mut config = Config::load()?;

    match key {
        "endpoint" => {
            // Reject unparseable URLs before they reach the fetch path
            Url::parse(value).map_err(|e| {
                CorkboardError::Config(format!("invalid endpoint URL '{value}': {e}"))
            })?;
            config.set_endpoint(value.to_string());
        }
        "api_key" => {
            config.set_api_key(value.to_string());
        }
        _ => {
            return Err(CorkboardError::Config(format!(
                "unknown config key '{key}'. Valid keys: {}",
                VALID_KEYS.join(", ")
            )));
        }
    }

    config.save()?;

    if json {
        return print_json(&json!({
            "action": "config_set",
            "key": key,
            "success": true,
        }));
    }

    println!("Set {}", key.cyan());
    Ok(())
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let key = validate_config_key(key)?;

    let config = Config::load()?;

    match key {
        "endpoint" => {
            let endpoint = config.endpoint();
            if json {
                return print_json(&json!({
                    "key": key,
                    "value": endpoint,
                    "is_default": endpoint == DEFAULT_ENDPOINT,
                }));
            }
            println!("{endpoint}");
            Ok(())
        }
        "api_key" => {
            let Some(api_key) = config.api_key() else {
                return Err(CorkboardError::Config("api_key not set".to_string()));
            };
            let masked = mask_sensitive_value(&api_key);
            if json {
                return print_json(&json!({
                    "key": key,
                    "value": masked,
                    "configured": true,
                    "masked": true,
                }));
            }
            println!("{masked} (masked - showing first 2 and last 2 characters)");
            Ok(())
        }
        _ => Err(CorkboardError::Config(format!(
            "unknown config key '{key}'. Valid keys: {}",
            VALID_KEYS.join(", ")
        ))),
    }
}
