//! BDD-style scenario tests for textstat-config.

use std::path::{Path, PathBuf};

use clap::Parser;
use textstat_config::{
    CONFIG_FILE_NAME, Cli, Commands, ConfigError, GlobalArgs, Metric, OutputFormat, Query,
    Settings, TomlConfig, View,
};

mod given_toml {
    use super::*;

    #[test]
    fn when_empty_string_parsed_then_all_defaults_applied() {
        let config = TomlConfig::parse("").expect("empty TOML should parse");
        assert_eq!(config, TomlConfig::default());
    }

    #[test]
    fn when_all_sections_present_then_fields_populated() {
        let config = TomlConfig::parse(
            r#"
[analysis]
lower = true

[input]
strip = "<br>"
strip_control = true
control_pattern = "[\\t]+"

[output]
format = "json"
"#,
        )
        .expect("valid TOML");

        assert_eq!(config.analysis.lower, Some(true));
        assert_eq!(config.input.strip.as_deref(), Some("<br>"));
        assert_eq!(config.input.strip_control, Some(true));
        assert_eq!(config.input.control_pattern.as_deref(), Some("[\\t]+"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn when_format_is_unknown_then_parse_fails() {
        assert!(TomlConfig::parse("[output]\nformat = \"html\"\n").is_err());
    }
}

mod given_config_file {
    use super::*;

    #[test]
    fn when_present_in_dir_then_discovered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[analysis]\nlower = true\n").unwrap();

        let config = TomlConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.unwrap().analysis.lower, Some(true));
    }

    #[test]
    fn when_absent_then_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(TomlConfig::discover(None, dir.path()).unwrap(), None);
    }

    #[test]
    fn when_explicit_path_missing_then_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(TomlConfig::discover(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn when_file_is_malformed_then_parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[analysis\n").unwrap();

        let err = TomlConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn when_file_has_unknown_format_then_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("textstat.toml");
        std::fs::write(&path, "[output]\nformat = \"html\"\n").unwrap();

        let err = TomlConfig::discover(Some(&path), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn when_explicit_path_missing_then_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TomlConfig::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

mod given_cli_and_file {
    use super::*;

    fn file() -> TomlConfig {
        TomlConfig::parse(
            "[analysis]\nlower = true\n[input]\nstrip = \"x\"\n[output]\nformat = \"text\"\n",
        )
        .unwrap()
    }

    #[test]
    fn when_cli_is_silent_then_file_values_apply() {
        let settings = Settings::resolve(&GlobalArgs::default(), None, Some(&file()));
        assert!(settings.lower);
        assert_eq!(settings.strip.as_deref(), Some("x"));
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn when_cli_negates_file_flags_then_they_are_off() {
        let mut config = file();
        config.input.strip_control = Some(true);
        let global = GlobalArgs {
            no_lower: true,
            no_strip_control: true,
            ..GlobalArgs::default()
        };

        let settings = Settings::resolve(&global, None, Some(&config));
        assert!(!settings.lower);
        assert!(!settings.strip_control);
    }

    #[test]
    fn when_cli_sets_values_then_cli_wins() {
        let global = GlobalArgs {
            strip: Some("y".to_string()),
            ..GlobalArgs::default()
        };
        let settings = Settings::resolve(&global, Some(OutputFormat::Json), Some(&file()));
        assert_eq!(settings.strip.as_deref(), Some("y"));
        assert_eq!(settings.format, OutputFormat::Json);
    }
}

mod given_command_line {
    use super::*;

    #[test]
    fn when_compare_parsed_then_metric_and_view_set() {
        let cli = Cli::parse_from([
            "textstat", "compare", "a.txt", "b.txt", "--metric", "average", "--view", "sentences",
        ]);
        match cli.command {
            Some(Commands::Compare(args)) => {
                assert_eq!(args.first, PathBuf::from("a.txt"));
                assert_eq!(args.second, Path::new("b.txt"));
                assert_eq!(args.metric, Metric::Average);
                assert_eq!(args.view, View::Sentences);
            }
            other => panic!("expected compare, got {other:?}"),
        }
    }

    #[test]
    fn when_compare_has_no_options_then_defaults_to_word_count() {
        let cli = Cli::parse_from(["textstat", "compare", "a", "b"]);
        let Some(Commands::Compare(args)) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.metric, Metric::Count);
        assert_eq!(args.view, View::Words);
    }

    #[test]
    fn when_query_parsed_then_kebab_case_names_accepted() {
        let cli = Cli::parse_from(["textstat", "query", "average-word-length", "-"]);
        let Some(Commands::Query(args)) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.query, Query::AverageWordLength);
        assert_eq!(args.path, Some(PathBuf::from("-")));
    }

    #[test]
    fn when_global_flags_follow_subcommand_then_still_parsed() {
        let cli = Cli::parse_from(["textstat", "report", "f.txt", "--lower", "-vv"]);
        assert!(cli.global.lower);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn when_unknown_metric_then_error() {
        let parsed = Cli::try_parse_from(["textstat", "compare", "a", "b", "--metric", "mean"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn when_no_subcommand_then_report_is_the_command() {
        let cli = Cli::parse_from(["textstat", "--format", "json", "notes.txt"]);
        let (_, command) = cli.into_command().unwrap();
        let Commands::Report(args) = command else {
            panic!("expected report");
        };
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.path, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn when_report_format_precedes_subcommand_then_conflict() {
        let cli = Cli::parse_from(["textstat", "--format", "json", "query", "words"]);
        let err = cli.into_command().unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn when_format_follows_subcommand_then_accepted() {
        let cli = Cli::parse_from(["textstat", "compare", "a", "b", "--format", "json"]);
        let (_, command) = cli.into_command().unwrap();
        let Commands::Compare(args) = command else {
            panic!("expected compare");
        };
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn when_no_lower_follows_lower_then_last_flag_wins() {
        let cli = Cli::parse_from(["textstat", "--lower", "--no-lower"]);
        assert!(!cli.global.lower);
        assert!(cli.global.no_lower);
    }
}
