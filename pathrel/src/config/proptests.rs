//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use crate::platform::PlatformPreset;
use proptest::prelude::*;

fn preset_strategy() -> impl Strategy<Value = PlatformPreset> {
    prop_oneof![
        Just(PlatformPreset::Posix),
        Just(PlatformPreset::Windows),
        Just(PlatformPreset::Macos),
        Just(PlatformPreset::Host),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(preset_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(platform, case_sensitive, drive_letters)| Config {
            platform,
            case_sensitive,
            drive_letters,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Fields set in the higher layer always win, unset ones fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.platform, high.platform.or(low.platform));
        prop_assert_eq!(merged.case_sensitive, high.case_sensitive.or(low.case_sensitive));
        prop_assert_eq!(merged.drive_letters, high.drive_letters.or(low.drive_letters));
    }

    // Merging the same layer twice changes nothing
    #[test]
    fn config_merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once;
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    // Explicit flags always survive into the resolved rules
    #[test]
    fn config_flags_override_preset(config in config_strategy()) {
        let rules = config.platform_rules();
        if let Some(case_sensitive) = config.case_sensitive {
            prop_assert_eq!(rules.case_sensitive, case_sensitive);
        }
        if let Some(drive_letters) = config.drive_letters {
            prop_assert_eq!(rules.has_drive_letters, drive_letters);
        }
    }

    // Only the posix/drive-letter contradiction is rejected
    #[test]
    fn config_validation_rejects_only_contradiction(config in config_strategy()) {
        let contradictory = config.platform == Some(PlatformPreset::Posix)
            && config.drive_letters == Some(true);
        prop_assert_eq!(ConfigValidator::validate(&config).is_err(), contradictory);
    }

    // Every config survives a YAML round trip
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
