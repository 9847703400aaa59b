//! Property tests for `configure set` followed by `configure get`.

use proptest::prelude::*;
use tempfile::TempDir;

use cdpcli::domain::services::active_profile;
use cdpcli::{
    CdpError, ConfigureUseCase, EngineConfig, Environment, GetOutcome, IniStoreRepository,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a set value reads back unchanged under the same profile.
    #[test]
    fn property_set_then_get_returns_value(
        key in "[a-z][a-z0-9_]{0,12}",
        value in "[A-Za-z0-9._:/=#;\\[\\]-][A-Za-z0-9 ._:/=#;\\[\\]-]{0,22}[A-Za-z0-9._:/=#;\\[\\]-]",
        profile in prop_oneof![Just("default".to_string()), "[a-z][a-z0-9-]{0,8}"],
    ) {
        let dir = TempDir::new().unwrap();
        let repo = IniStoreRepository::new(&EngineConfig::in_dir(dir.path()));
        let use_case = ConfigureUseCase::new(repo);
        let profile = active_profile(Some(profile.as_str()), &Environment::new(), "default");

        use_case.set(&key, &value, &profile).unwrap();

        prop_assert_eq!(
            use_case.get(&key, &profile).unwrap(),
            GetOutcome::Found(value)
        );
    }

    /// PROPERTY: writing one key never disturbs another.
    #[test]
    fn property_set_leaves_other_keys(
        first in "[a-m][a-z0-9_]{0,8}",
        second in "[n-z][a-z0-9_]{0,8}",
        value in "[A-Za-z0-9]{1,12}",
    ) {
        let dir = TempDir::new().unwrap();
        let repo = IniStoreRepository::new(&EngineConfig::in_dir(dir.path()));
        let use_case = ConfigureUseCase::new(repo);
        let profile = active_profile(None, &Environment::new(), "default");

        use_case.set(&first, "kept", &profile).unwrap();
        use_case.set(&second, &value, &profile).unwrap();

        prop_assert_eq!(
            use_case.get(&first, &profile).unwrap(),
            GetOutcome::Found("kept".to_string())
        );
    }

    /// PROPERTY: any single-line key and value either reads back unchanged
    /// or is refused with a validation error and nothing written.
    #[test]
    fn property_set_round_trips_or_refuses(
        key in "[^.\\p{C}]{1,12}",
        value in "\\PC{0,40}",
    ) {
        prop_assume!(key.trim() != "cdp_private_key");
        let dir = TempDir::new().unwrap();
        let config = EngineConfig::in_dir(dir.path());
        let use_case = ConfigureUseCase::new(IniStoreRepository::new(&config));
        let profile = active_profile(None, &Environment::new(), "default");

        match use_case.set(&key, &value, &profile) {
            Ok(_) => prop_assert_eq!(
                use_case.get(&key, &profile).unwrap(),
                GetOutcome::Found(value)
            ),
            Err(err) => {
                prop_assert!(
                    matches!(
                        err,
                        CdpError::Type { .. }
                            | CdpError::InvalidName { .. }
                            | CdpError::AmbiguousName { .. }
                    ),
                    "unexpected error: {}",
                    err
                );
                prop_assert!(!config.config_file.exists());
                prop_assert!(!config.credentials_file.exists());
            }
        }
    }
}
