use std::path::{Path, PathBuf};

use super::*;

fn config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        primary_feed_path: PathBuf::from("raw/primary.json"),
        supplementary_feed_path: PathBuf::from("raw/supplementary.json"),
        cosmetics_feed_path: PathBuf::from("raw/cosmetics.json"),
        merged_path: PathBuf::from("merged/list.json"),
        output_dir: PathBuf::from("merged/by_type"),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["inkcat"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_merge_without_overrides() {
    let cli = Cli::try_parse_from(["inkcat", "merge"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Merge(MergeArgs {
            primary: None,
            supplementary: None,
            cosmetics: None,
            merged: None,
        }))
    ));
}

#[test]
fn parses_merge_path_overrides() {
    let cli = Cli::try_parse_from([
        "inkcat",
        "merge",
        "--primary",
        "a.json",
        "--cosmetics",
        "c.json",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Merge(args)) = cli.command else {
        panic!("expected merge command");
    };
    assert_eq!(args.primary.as_deref(), Some(Path::new("a.json")));
    assert_eq!(args.cosmetics.as_deref(), Some(Path::new("c.json")));
    assert!(args.supplementary.is_none());
}

#[test]
fn parses_classify_output_dir() {
    let cli = Cli::try_parse_from(["inkcat", "classify", "--output-dir", "out"])
        .expect("expected valid cli args");
    let Some(Commands::Classify(args)) = cli.command else {
        panic!("expected classify command");
    };
    assert_eq!(args.output_dir.as_deref(), Some(Path::new("out")));
    assert!(args.merged.is_none());
}

#[test]
fn parses_run_with_merge_and_output_overrides() {
    let cli = Cli::try_parse_from([
        "inkcat",
        "run",
        "--merged",
        "m.json",
        "--output-dir",
        "out",
    ])
    .expect("expected valid cli args");
    let Some(Commands::Run { merge, output_dir }) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(merge.merged.as_deref(), Some(Path::new("m.json")));
    assert_eq!(output_dir.as_deref(), Some(Path::new("out")));
}

#[test]
fn rejects_unknown_command() {
    assert!(Cli::try_parse_from(["inkcat", "scrape"]).is_err());
}

#[test]
fn merge_args_override_only_given_paths() {
    let mut config = config();
    MergeArgs {
        supplementary: Some(PathBuf::from("other.json")),
        ..MergeArgs::default()
    }
    .apply(&mut config);

    assert_eq!(config.supplementary_feed_path, PathBuf::from("other.json"));
    assert_eq!(config.primary_feed_path, PathBuf::from("raw/primary.json"));
    assert_eq!(config.merged_path, PathBuf::from("merged/list.json"));
}

#[test]
fn classify_args_override_merged_and_output() {
    let mut config = config();
    ClassifyArgs {
        merged: Some(PathBuf::from("m.json")),
        output_dir: Some(PathBuf::from("out")),
    }
    .apply(&mut config);

    assert_eq!(config.merged_path, PathBuf::from("m.json"));
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.cosmetics_feed_path, PathBuf::from("raw/cosmetics.json"));
}
