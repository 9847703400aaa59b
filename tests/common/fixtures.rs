//! Reusable store contents.

/// Credentials file with a default and a `testing` profile.
pub const CREDENTIALS: &str = r#"[default]
cdp_access_key_id = default_access_key
cdp_private_key = default_private_key

[testing]
cdp_access_key_id = testing_access_key
cdp_private_key = testing_private_key
"#;

/// Config file with profile settings and an ad hoc section.
pub const CONFIG: &str = r#"[default]
cdp_region = us-west-1

[profile testing]
cdp_access_key_id = testing_access_key
cdp_region = eu-1

[foobar]
farboo = true
"#;

/// Config for a private control plane profile.
pub const PRIVATE_CONFIG: &str = r#"[profile onprem]
cdp_endpoint_url = https://cdp.corp.example:9443
"#;
