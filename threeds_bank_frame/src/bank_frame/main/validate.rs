use url::{Host, Url};

use crate::bank_frame::config::{THREEDS_FRAME_ORIGIN, THREEDS_OPERATOR_DOMAINS};
use crate::bank_frame::errors::BankFrameError;
use crate::bank_frame::types::{AuthenticationConfiguration, SanitizedConfiguration};

/// Inert navigation target substituted for unsafe ACS URLs.
pub const BLANK_URL: &str = "about:blank";

/// Domain allowlist and resolution base applied to every configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePolicy {
    operator_domains: Vec<String>,
    base_url: Url,
}

impl FramePolicy {
    /// Domains are lower-cased and stripped of outer dots; empty entries are
    /// dropped.
    pub fn new<I, S>(operator_domains: I, base_url: Url) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let operator_domains = operator_domains
            .into_iter()
            .map(|d| d.as_ref().trim().trim_matches('.').to_ascii_lowercase())
            .filter(|d| !d.is_empty())
            .collect();

        Self {
            operator_domains,
            base_url,
        }
    }

    /// Policy built from `THREEDS_OPERATOR_DOMAINS` and `THREEDS_FRAME_ORIGIN`.
    pub fn from_env() -> Self {
        Self {
            operator_domains: THREEDS_OPERATOR_DOMAINS.clone(),
            base_url: THREEDS_FRAME_ORIGIN.clone(),
        }
    }

    pub fn operator_domains(&self) -> &[String] {
        &self.operator_domains
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Check the term URL against the operator allowlist and neutralize the ACS URL.
///
/// A term URL off the operator domains is a terminal error. An unsafe ACS URL
/// is not an error: it is replaced with [`BLANK_URL`] so the frame still
/// navigates away cleanly.
pub fn validate_and_sanitize(
    config: &AuthenticationConfiguration,
    policy: &FramePolicy,
) -> Result<SanitizedConfiguration, BankFrameError> {
    if !is_operator_url(&config.term_url, &policy.operator_domains) {
        tracing::error!(
            term_url = %config.term_url,
            "Rejected configuration: term URL is not on an operator domain"
        );
        return Err(BankFrameError::TermUrlRequiresOperatorDomain);
    }

    Ok(SanitizedConfiguration {
        acs_url: sanitize_acs_url(&config.acs_url, &policy.base_url),
        pareq: config.pareq.clone(),
        md: config.md.clone(),
        term_url: config.term_url.clone(),
    })
}

/// An http(s) URL whose host is an operator domain or a subdomain of one.
///
/// Compares whole trailing labels, so `notoperator.com` and
/// `operator.com.evil.net` do not match `operator.com`.
pub(crate) fn is_operator_url(raw: &str, operator_domains: &[String]) -> bool {
    // The raw string is forwarded to the ACS unchanged, so it must not rely on
    // WHATWG repairs that other URL parsers do not make
    if has_repairable_characters(raw) {
        return false;
    }

    let Ok(url) = Url::parse(raw) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let Some(Host::Domain(host)) = url.host() else {
        return false;
    };

    // A single trailing root dot names the same host
    let host = host.strip_suffix('.').unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    operator_domains
        .iter()
        .any(|domain| has_label_suffix(&labels, domain))
}

/// Backslashes, ASCII whitespace and control characters.
fn has_repairable_characters(raw: &str) -> bool {
    raw.chars()
        .any(|c| c == '\\' || c.is_ascii_whitespace() || c.is_ascii_control())
}

fn has_label_suffix(labels: &[&str], domain: &str) -> bool {
    let suffix: Vec<&str> = domain.split('.').collect();
    if suffix.iter().any(|label| label.is_empty()) || suffix.len() > labels.len() {
        return false;
    }
    labels[labels.len() - suffix.len()..] == suffix[..]
}

/// Resolve `raw` the way an anchor resolves its `href` and keep it only when
/// the resolved scheme is http or https.
///
/// WHATWG parsing removes tabs and newlines and lower-cases the scheme, so
/// obfuscated script URLs resolve to their real scheme before the check.
pub(crate) fn sanitize_acs_url(raw: &str, base_url: &Url) -> String {
    match base_url.join(raw) {
        Ok(resolved) if matches!(resolved.scheme(), "http" | "https") => raw.to_string(),
        Ok(resolved) if resolved.as_str() == BLANK_URL => BLANK_URL.to_string(),
        Ok(resolved) => {
            tracing::warn!(
                scheme = resolved.scheme(),
                "Neutralized ACS URL with unsafe scheme"
            );
            BLANK_URL.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Neutralized unparseable ACS URL");
            BLANK_URL.to_string()
        }
    }
}
