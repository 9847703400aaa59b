//! Section naming contracts
//!
//! Credentials sections are bare profile names. Config sections are
//! `profile <name>`, except `default` which is never prefixed.

use crate::common::*;

#[test]
fn contract_default_profile_is_never_prefixed() {
    let env = TestEnv::builder().build();

    let result = env.run(&["configure", "set", "cdp_region", "eu-1", "--profile", "default"]);
    assert_exit_code!(result, 0);

    let config = env.read_config();
    assert!(config.contains("[default]"), "{}", config);
    assert!(!config.contains("[profile default]"), "{}", config);
}

#[test]
fn contract_credentials_sections_are_bare() {
    let env = TestEnv::builder().build();

    let result = env.run(&["configure", "set", "profile.dev.cdp_access_key_id", "AKID"]);
    assert_exit_code!(result, 0);

    let credentials = env.read_credentials();
    assert!(credentials.contains("[dev]"), "{}", credentials);
    assert!(!credentials.contains("[profile dev]"), "{}", credentials);
}

#[test]
fn contract_credentials_in_config_file_are_found() {
    let env = TestEnv::builder()
        .with_config("[profile dev]\ncdp_access_key_id = config_key\n")
        .build();

    let result = env.run(&["configure", "get", "cdp_access_key_id", "--profile", "dev"]);

    assert_exit_code!(result, 0);
    assert_eq!(result.stdout, "config_key\n");
}
