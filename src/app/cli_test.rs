use super::*;

#[test]
fn test_defaults() {
    let options = Cli::parse_from(["wordhoard"]).into_options();
    assert_eq!(options.kindle_db, PathBuf::from("vocab.db"));
    assert_eq!(options.dict_db, PathBuf::from("stardict.db"));
    assert_eq!(options.output, None);
    assert_eq!(options.limit, None);
    assert!(options.use_ai);
    assert!(!options.full);
}

#[test]
fn test_all_flags() {
    let cli = Cli::parse_from([
        "wordhoard",
        "my_vocab.db",
        "dict.db",
        "-o",
        "deck.csv",
        "-l",
        "10",
        "--no-ai",
        "--full",
        "--config",
        "settings.json",
        "-v",
    ]);
    assert!(cli.verbose);
    let options = cli.into_options();
    assert_eq!(options.kindle_db, PathBuf::from("my_vocab.db"));
    assert_eq!(options.dict_db, PathBuf::from("dict.db"));
    assert_eq!(options.output, Some(PathBuf::from("deck.csv")));
    assert_eq!(options.limit, Some(10));
    assert!(!options.use_ai);
    assert!(options.full);
    assert_eq!(options.config, Some(PathBuf::from("settings.json")));
}

#[test]
fn test_rejects_bad_limit() {
    assert!(Cli::try_parse_from(["wordhoard", "-l", "many"]).is_err());
}

#[test]
fn test_command_is_well_formed() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
