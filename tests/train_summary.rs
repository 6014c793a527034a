use clap::Parser;
use mindgames::cli::commands::train::{TrainArgs, execute};
use tempfile::tempdir;

fn parse_args<I, T>(args: I) -> TrainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TrainArgs::parse_from(args)
}

#[test]
fn summary_without_extension_appends_json() {
    let tmp = tempdir().unwrap();
    let summary_stem = tmp.path().join("run_overview");

    let args = parse_args([
        "mindgames-train",
        "--games",
        "5",
        "--opponent",
        "random",
        "--seed",
        "3",
        "--quiet",
        "--summary",
        summary_stem.to_str().unwrap(),
    ]);

    execute(args).expect("training with summary should succeed");

    let expected_path = summary_stem.with_extension("json");
    assert!(
        expected_path.exists(),
        "expected summary at {}",
        expected_path.display()
    );

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["training"]["total_games"], 5);
    assert_eq!(parsed["metadata"]["opponent"], "random");
    assert_eq!(parsed["metadata"]["seed"], 3);
}

#[test]
fn summary_directory_argument_creates_default_file() {
    let tmp = tempdir().unwrap();
    let summary_dir = tmp.path().join("summaries");
    let summary_arg = format!("{}{}", summary_dir.display(), std::path::MAIN_SEPARATOR);

    let args = parse_args([
        "mindgames-train",
        "--games",
        "3",
        "--opponent",
        "self-play",
        "--quiet",
        "--summary",
        &summary_arg,
    ]);

    execute(args).expect("training with summary directory should succeed");

    let expected_path = summary_dir.join("training_summary.json");
    assert!(expected_path.exists());

    let contents = std::fs::read_to_string(&expected_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let training = &parsed["training"];
    assert_eq!(training["total_games"], 3);
    let total = training["wins"].as_u64().unwrap()
        + training["draws"].as_u64().unwrap()
        + training["losses"].as_u64().unwrap();
    assert_eq!(total, 3);
    assert_eq!(parsed["metadata"]["opponent"], "self-play");
}

#[test]
fn config_file_supplies_training_defaults() {
    let tmp = tempdir().unwrap();
    let config_path = tmp.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{ "training": { "games": 4, "opponent": "minimax", "agent_player": "O" } }"#,
    )
    .unwrap();
    let summary = tmp.path().join("vs_minimax.json");

    let args = parse_args([
        "mindgames-train",
        "--config",
        config_path.to_str().unwrap(),
        "--quiet",
        "--summary",
        summary.to_str().unwrap(),
    ]);
    execute(args).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(parsed["training"]["total_games"], 4);
    assert_eq!(parsed["training"]["wins"], 0);
    assert_eq!(parsed["metadata"]["agent_player"], "O");
}

#[test]
fn missing_config_file_is_an_error() {
    let tmp = tempdir().unwrap();
    let args = parse_args([
        "mindgames-train",
        "--config",
        tmp.path().join("absent.json").to_str().unwrap(),
        "--quiet",
    ]);
    assert!(execute(args).is_err());
}
