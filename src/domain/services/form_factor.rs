//! Form-factor inference
//!
//! Decides whether an invocation talks to the public control plane or to a
//! private deployment. An explicit form factor always wins; otherwise the
//! endpoint URL is classified by host pattern, and no endpoint at all means
//! the public default.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::value_objects::FormFactor;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-west-1";

/// Hosts of the public control plane, plus local test servers.
///
/// Anchored at the start only, like a prefix match.
static PUBLIC_ENDPOINT_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(.+(altus|cdp|dev|int|stage).(cloudera|clouderagovt).com)|(http://localhost:\d+.*))",
    )
    .ok()
});

/// Public endpoint for `region` (`us-west-1` when `None`).
pub fn default_endpoint_url(region: Option<&str>) -> String {
    let region = region
        .filter(|r| !r.is_empty() && *r != "default")
        .unwrap_or(DEFAULT_REGION);
    format!("https://api.{}.cdp.cloudera.com", region)
}

/// True if `url` addresses the public control plane.
pub fn is_public_endpoint(url: &str) -> bool {
    PUBLIC_ENDPOINT_REGEX
        .as_ref()
        .is_some_and(|re| re.is_match(url))
}

/// Classify an endpoint URL. Missing or empty means public.
pub fn classify(endpoint_url: Option<&str>) -> FormFactor {
    match endpoint_url.filter(|u| !u.is_empty()) {
        None => FormFactor::Public,
        Some(url) if is_public_endpoint(url) => FormFactor::Public,
        Some(_) => FormFactor::Private,
    }
}

/// Infer the form factor of an invocation.
///
/// `explicit` is returned unchanged when given, whatever the URL says.
pub fn infer(explicit: Option<FormFactor>, endpoint_url: Option<&str>) -> FormFactor {
    match explicit {
        Some(form_factor) => form_factor,
        None => classify(endpoint_url),
    }
}
