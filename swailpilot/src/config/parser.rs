//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [boat] section
    if let Some(section) = ini.section(Some("boat")) {
        config.boat.user_token = non_empty(section.get("user_token"));
        config.boat.boat_id = non_empty(section.get("boat_id"));
    }

    // [api] section
    if let Some(section) = ini.section(Some("api")) {
        if let Some(v) = section.get("base_url") {
            let v = v.trim();
            if !v.is_empty() {
                config.api.base_url = normalize_base_url(v)?;
            }
        }
        if let Some(v) = section.get("timeout") {
            config.api.timeout = parse_positive(v)
                .ok_or_else(|| invalid("api", "timeout", v, "must be a positive integer (seconds)"))?;
        }
    }

    // [autopilot] section
    if let Some(section) = ini.section(Some("autopilot")) {
        if let Some(v) = section.get("poll_interval") {
            config.autopilot.poll_interval = parse_positive(v).ok_or_else(|| {
                invalid(
                    "autopilot",
                    "poll_interval",
                    v,
                    "must be a positive integer (seconds)",
                )
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Check that `url` is an http(s) URL and strip any trailing `/`.
///
/// Shared by the `[api] base_url` key and command-line overrides.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigFileError> {
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid("api", "base_url", url, "must start with http:// or https://"));
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|v| *v > 0)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
