//! Property tests for config precedence.

use proptest::prelude::*;
use textstat_config::{GlobalArgs, Settings, TomlConfig};

proptest! {
    #[test]
    fn cli_strip_always_wins(cli in "[a-z]{1,8}", file in "[a-z]{1,8}") {
        let mut config = TomlConfig::default();
        config.input.strip = Some(file);
        let global = GlobalArgs { strip: Some(cli.clone()), ..GlobalArgs::default() };

        let settings = Settings::resolve(&global, None, Some(&config));
        prop_assert_eq!(settings.strip, Some(cli));
    }

    #[test]
    fn lower_is_set_if_either_source_sets_it(
        cli in any::<bool>(),
        file in proptest::option::of(any::<bool>()),
    ) {
        let mut config = TomlConfig::default();
        config.analysis.lower = file;
        let global = GlobalArgs { lower: cli, ..GlobalArgs::default() };

        let settings = Settings::resolve(&global, None, Some(&config));
        prop_assert_eq!(settings.lower, cli || file.unwrap_or(false));
    }
}
