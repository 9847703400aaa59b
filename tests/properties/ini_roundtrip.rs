//! Property tests for the INI store format.

use proptest::prelude::*;

use cdpcli::ConfigStore;

fn section_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("default".to_string()),
        "[a-z][a-z0-9_-]{0,8}".prop_map(|name| format!("profile {}", name)),
        "[a-z][a-z0-9 _-]{0,10}[a-z0-9]",
    ]
}

fn entry() -> impl Strategy<Value = (String, String)> {
    ("[a-z][a-z0-9_]{0,11}", "([A-Za-z0-9._:/=-][A-Za-z0-9 ._:/=-]{0,20}[A-Za-z0-9._:/=-])?")
}

fn store() -> impl Strategy<Value = ConfigStore> {
    proptest::collection::vec(
        (section_name(), proptest::collection::vec(entry(), 1..5)),
        0..5,
    )
    .prop_map(|sections| {
        let mut store = ConfigStore::new();
        for (name, entries) in sections {
            let section = store.ensure_section(&name);
            for (key, value) in entries {
                section.set(key, value);
            }
        }
        store
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: serialising and parsing a store gives the same store.
    #[test]
    fn property_store_round_trips(store in store()) {
        let text = store.to_ini_string().unwrap();
        let parsed = ConfigStore::parse(&text).unwrap();
        prop_assert_eq!(parsed, store);
    }

    /// PROPERTY: serialisation is stable after one round trip.
    #[test]
    fn property_serialisation_is_idempotent(store in store()) {
        let once = store.to_ini_string().unwrap();
        let twice = ConfigStore::parse(&once).unwrap().to_ini_string().unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(text in "\\PC{0,200}") {
        let _ = ConfigStore::parse(&text);
    }

    /// PROPERTY: lines of the form `[x]`, `k = v`, comments and blanks always parse.
    #[test]
    fn property_well_formed_lines_parse(
        lines in proptest::collection::vec(
            prop_oneof![
                Just(String::new()),
                "[#;][ -~]{0,20}",
                "[a-z]{1,8} ?= ?[A-Za-z0-9 ._/=-]{0,20}",
            ],
            0..20,
        )
    ) {
        let text = format!("[default]\n{}", lines.join("\n"));
        prop_assert!(ConfigStore::parse(&text).is_ok(), "failed to parse:\n{}", text);
    }
}
