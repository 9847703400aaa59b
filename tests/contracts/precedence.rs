//! Value precedence contracts
//!
//! Every option resolves from the first source that has it:
//! command-line flag > environment variable > profile store > default

use crate::common::*;

fn region_row(stdout: &str) -> String {
    stdout
        .lines()
        .find(|line| line.split_whitespace().next() == Some("cdp_region"))
        .unwrap_or_default()
        .to_string()
}

/// CONTRACT: a flag beats the environment and the stores
mod flag_wins {
    use super::*;

    #[test]
    fn contract_flag_overrides_env_and_store() {
        let env = TestEnv::builder().with_config(CONFIG).build();

        let result = env.run_with_env(
            &["configure", "list", "--cdp-region", "from-flag"],
            &[("CDP_REGION", "from-env")],
        );

        assert_exit_code!(result, 0);
        let row = region_row(&result.stdout);
        assert!(row.contains("from-flag"), "{}", row);
        assert!(row.contains("manual"), "{}", row);
        assert!(row.contains("--cdp-region"), "{}", row);
    }
}

/// CONTRACT: the environment beats the stores
mod env_beats_store {
    use super::*;

    #[test]
    fn contract_env_overrides_store() {
        let env = TestEnv::builder().with_config(CONFIG).build();

        let result = env.run_with_env(&["configure", "list"], &[("CDP_REGION", "from-env")]);

        assert_exit_code!(result, 0);
        let row = region_row(&result.stdout);
        assert!(row.contains("from-env") && row.contains("CDP_REGION"), "{}", row);
    }

    #[test]
    fn contract_empty_env_var_is_unset() {
        let env = TestEnv::builder().with_config(CONFIG).build();

        let result = env.run_with_env(&["configure", "list"], &[("CDP_REGION", "")]);

        assert_exit_code!(result, 0);
        let row = region_row(&result.stdout);
        assert!(row.contains("us-west-1") && row.contains("config-file"), "{}", row);
    }
}

/// CONTRACT: the store is consulted for the active profile only
mod store_is_profile_scoped {
    use super::*;

    #[test]
    fn contract_other_profiles_do_not_leak() {
        let env = TestEnv::builder()
            .with_config("[profile other]\ncdp_region = eu-9\n")
            .build();

        let result = env.run(&["configure", "list"]);

        assert_exit_code!(result, 0);
        let row = region_row(&result.stdout);
        assert!(row.contains("<not set>"), "{}", row);
    }
}
