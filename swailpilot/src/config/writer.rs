//! INI serialization: `ConfigFile` → commented INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let user_token = config.boat.user_token.as_deref().unwrap_or("");
    let boat_id = config.boat.boat_id.as_deref().unwrap_or("");

    format!(
        r#"[boat]
; Your user unique token (get it after you identify on the web)
user_token = {}
; The identifier of the boat you want to control
boat_id = {}

[api]
; Root of the swail.io API
base_url = {}
; HTTP request timeout in seconds
timeout = {}

[autopilot]
; Seconds between two course evaluations
poll_interval = {}

[logging]
; Log file, truncated at every start
file = {}
"#,
        user_token,
        boat_id,
        config.api.base_url,
        config.api.timeout,
        config.autopilot.poll_interval,
        config.logging.file.display(),
    )
}
