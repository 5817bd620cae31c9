use std::{env, sync::LazyLock, time::Duration};
use url::Url;

use super::errors::BankFrameError;

/// Operator domain family the term URL must belong to.
///
/// Comma-separated list, e.g. `operator.com,operator-gateway.com`.
/// Required: there is no safe default for an allowlist.
pub(super) static THREEDS_OPERATOR_DOMAINS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let raw = env::var("THREEDS_OPERATOR_DOMAINS").unwrap_or_default();
    parse_operator_domains(&raw).unwrap_or_else(|e| panic!("THREEDS_OPERATOR_DOMAINS: {e}"))
});

/// Origin the frame is served from. Relative ACS URLs resolve against it.
/// Default: "https://localhost"
pub(super) static THREEDS_FRAME_ORIGIN: LazyLock<Url> = LazyLock::new(|| {
    let raw = env::var("THREEDS_FRAME_ORIGIN").unwrap_or_else(|_| "https://localhost".to_string());
    parse_frame_origin(&raw).unwrap_or_else(|e| panic!("THREEDS_FRAME_ORIGIN: {e}"))
});

/// How long a frame waits for its configuration. Unset or `0` means forever.
pub static THREEDS_CONFIGURATION_TIMEOUT: LazyLock<Option<Duration>> = LazyLock::new(|| {
    let raw = env::var("THREEDS_CONFIGURATION_TIMEOUT_SECS").ok();
    parse_configuration_timeout(raw.as_deref())
        .unwrap_or_else(|e| panic!("THREEDS_CONFIGURATION_TIMEOUT_SECS: {e}"))
});

pub(super) fn parse_operator_domains(raw: &str) -> Result<Vec<String>, BankFrameError> {
    let domains: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().trim_matches('.').to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if domains.is_empty() {
        return Err(BankFrameError::Config(
            "at least one operator domain is required".to_string(),
        ));
    }

    if let Some(bad) = domains
        .iter()
        .find(|d| d.split('.').any(|label| label.is_empty()))
    {
        return Err(BankFrameError::Config(format!(
            "'{bad}' is not a valid domain"
        )));
    }

    Ok(domains)
}

pub(super) fn parse_frame_origin(raw: &str) -> Result<Url, BankFrameError> {
    let url = Url::parse(raw).map_err(|e| BankFrameError::Config(format!("'{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BankFrameError::Config(format!(
            "'{raw}' must be http or https, got '{other}'"
        ))),
    }
}

pub(super) fn parse_configuration_timeout(
    raw: Option<&str>,
) -> Result<Option<Duration>, BankFrameError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let secs = raw.parse::<u64>().map_err(|e| {
        BankFrameError::Config(format!("'{raw}' is not a number of seconds: {e}"))
    })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

/// Validate the environment before forcing the statics, so a bad setting is
/// reported as an error instead of a panic.
pub(crate) fn init() -> Result<(), BankFrameError> {
    parse_operator_domains(&env::var("THREEDS_OPERATOR_DOMAINS").unwrap_or_default())?;
    if let Ok(raw) = env::var("THREEDS_FRAME_ORIGIN") {
        parse_frame_origin(&raw)?;
    }
    parse_configuration_timeout(env::var("THREEDS_CONFIGURATION_TIMEOUT_SECS").ok().as_deref())?;

    let _ = THREEDS_OPERATOR_DOMAINS.len();
    let _ = THREEDS_FRAME_ORIGIN.as_str();
    if let Some(timeout) = *THREEDS_CONFIGURATION_TIMEOUT {
        tracing::info!("Configuration wait limited to {}s", timeout.as_secs());
    } else {
        tracing::info!("Configuration wait is unbounded");
    }
    Ok(())
}
