//! Property tests for configuration name resolution.

use proptest::prelude::*;

use cdpcli::domain::services::name_resolver;
use cdpcli::{SectionRef, StoreKind};

fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an unqualified key belongs to the active profile.
    #[test]
    fn property_unqualified_uses_active_profile(
        key in identifier(),
        profile in identifier(),
    ) {
        let name = name_resolver::resolve(&key, &profile).unwrap();
        prop_assert_eq!(name.section, SectionRef::profile(profile));
        prop_assert_eq!(name.key, key);
    }

    /// PROPERTY: `profile.<p>.<k>` addresses profile `p` whatever is active.
    #[test]
    fn property_profile_prefix_overrides_active(
        key in identifier(),
        profile in identifier(),
        active in identifier(),
    ) {
        let raw = format!("profile.{}.{}", profile, key);
        let name = name_resolver::resolve(&raw, &active).unwrap();
        prop_assert_eq!(name.section, SectionRef::profile(profile));
        prop_assert_eq!(name.key, key);
    }

    /// PROPERTY: `default.<k>` means `<k>` under the default profile, whatever is active.
    #[test]
    fn property_default_qualified_matches_unqualified(
        key in identifier(),
        active in identifier(),
    ) {
        let qualified = name_resolver::resolve(&format!("default.{}", key), &active).unwrap();
        let unqualified = name_resolver::resolve(&key, "default").unwrap();
        prop_assert_eq!(qualified, unqualified);
    }

    /// PROPERTY: routing depends on the key alone.
    #[test]
    fn property_store_follows_key(
        key in prop_oneof![
            Just("cdp_access_key_id".to_string()),
            Just("cdp_private_key".to_string()),
            identifier(),
        ],
        profile in identifier(),
    ) {
        let name = name_resolver::resolve(&key, &profile).unwrap();
        let expected = if key == "cdp_access_key_id" || key == "cdp_private_key" {
            StoreKind::Credentials
        } else {
            StoreKind::Config
        };
        prop_assert_eq!(name.kind, expected);
    }

    /// PROPERTY: resolution never panics.
    #[test]
    fn property_resolve_never_panics(raw in "\\PC{0,40}", profile in identifier()) {
        let _ = name_resolver::resolve(&raw, &profile);
    }
}
