//! Shared fixtures for unit tests across the crate

use url::Url;

use crate::bank_frame::{AuthenticationConfiguration, FramePolicy};

pub(crate) const OPERATOR_DOMAIN: &str = "operator.com";

/// Policy with a single operator domain, independent of the environment
pub(crate) fn test_policy() -> FramePolicy {
    FramePolicy::new(
        [OPERATOR_DOMAIN],
        Url::parse("https://frames.operator.com/3ds/bank-frame").unwrap(),
    )
}

pub(crate) fn sample_configuration() -> AuthenticationConfiguration {
    AuthenticationConfiguration {
        acs_url: "http://example.com/acs".to_string(),
        pareq: "the pareq".to_string(),
        md: "the md".to_string(),
        term_url: "https://operator.com/some/url".to_string(),
    }
}

pub(crate) fn configuration_with(acs_url: &str, term_url: &str) -> AuthenticationConfiguration {
    AuthenticationConfiguration {
        acs_url: acs_url.to_string(),
        term_url: term_url.to_string(),
        ..sample_configuration()
    }
}
