use super::*;

#[test]
fn no_flags_uses_defaults() {
    let cli = Cli::try_parse_from(["jobsync"]).expect("expected valid cli args");
    assert!(cli.output.is_none());
    assert!(!cli.skip_upload);
}

#[test]
fn parses_config_path() {
    let cli = Cli::try_parse_from(["jobsync", "--config", "/etc/jobsync/config.toml"])
        .expect("expected valid cli args");
    assert_eq!(cli.config, PathBuf::from("/etc/jobsync/config.toml"));
}

#[test]
fn parses_output_override() {
    let cli = Cli::try_parse_from(["jobsync", "--output", "out/listings.csv"])
        .expect("expected valid cli args");
    assert_eq!(cli.output, Some(PathBuf::from("out/listings.csv")));
}

#[test]
fn parses_skip_upload() {
    let cli =
        Cli::try_parse_from(["jobsync", "--skip-upload"]).expect("expected valid cli args");
    assert!(cli.skip_upload);
}

#[test]
fn rejects_unknown_flag() {
    let result = Cli::try_parse_from(["jobsync", "--bucket", "other"]);
    assert!(result.is_err());
}
