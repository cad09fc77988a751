use crate::cli::Config;
use crate::ports::inbound::RunRecipesApp;
use crate::tests::support::{serve_once, FakeEnv};
use crate::wiring;
use common::error::Error;
use std::path::Path;
use std::sync::Arc;

/// 一時ホームで App を組み立て、Runner で run する（テスト用の入口）
fn run_app(home: &Path, env: FakeEnv, config: Config) -> Result<i32, Error> {
    let env = env.with("RECIPES_HOME", home.to_string_lossy());
    let app = wiring::wire_recipes_with(Arc::new(env), config.verbose, config.data_dir.as_deref())?;
    let runner = crate::Runner { app };
    runner.run(config)
}

fn command(name: &str, args: &[&str]) -> Config {
    Config {
        command_name: Some(name.to_string()),
        command_args: args.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

fn stored(home: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(home.join("data").join("my-recipes.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_run_app_with_help() {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), config).unwrap(), 0);
}

#[test]
fn test_run_app_without_home_is_env_error() {
    let app = wiring::wire_recipes_with(Arc::new(FakeEnv::default()), false, None);
    let err = app.err().unwrap();
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_list_seeds_store_and_writes_log() {
    let tmp = tempfile::tempdir().unwrap();
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), Config::default()).unwrap(), 0);

    let doc = stored(tmp.path());
    assert_eq!(doc["version"], 2);
    assert_eq!(doc["recipes"].as_array().unwrap().len(), 3);

    let log = std::fs::read_to_string(tmp.path().join("state/logs/recipes.jsonl")).unwrap();
    assert!(log.contains("\"command started\""));
    assert!(log.contains("\"command finished\""));
}

#[test]
fn test_add_show_remove_round() {
    let tmp = tempfile::tempdir().unwrap();
    let add = Config {
        command_name: Some("add".to_string()),
        title: Some("X".to_string()),
        short_desc: Some("Y".to_string()),
        ingredients: vec!["A".to_string(), "B".to_string()],
        steps: vec!["1. step".to_string()],
        ..Default::default()
    };
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), add).unwrap(), 0);

    let doc = stored(tmp.path());
    let recipes = doc["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 4);
    let added = &recipes[3];
    assert_eq!(added["ingredients"], "A\nB");
    assert_eq!(added["desc"], "1. step");
    assert_eq!(added["image"], "/icecreamberry.png");
    let id = added["id"].as_u64().unwrap().to_string();

    assert_eq!(run_app(tmp.path(), FakeEnv::default(), command("show", &[id.as_str()])).unwrap(), 0);
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), command("remove", &[id.as_str()])).unwrap(), 0);
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), command("show", &[id.as_str()])).unwrap(), 1);
    assert_eq!(stored(tmp.path())["recipes"].as_array().unwrap().len(), 3);
}

#[test]
fn test_add_with_missing_field_is_data_error() {
    let tmp = tempfile::tempdir().unwrap();
    let add = Config {
        command_name: Some("add".to_string()),
        title: Some("X".to_string()),
        ..Default::default()
    };
    let err = run_app(tmp.path(), FakeEnv::default(), add).unwrap_err();
    assert_eq!(err.exit_code(), 65);
    assert!(err.to_string().contains("Please fill in every field"));

    let log = std::fs::read_to_string(tmp.path().join("state/logs/recipes.jsonl")).unwrap();
    let finished: serde_json::Value = log
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .find(|r| r["message"] == "command finished")
        .unwrap();
    assert_eq!(finished["fields"]["exit_code"], 65);
}

#[test]
fn test_add_embeds_local_image() {
    let tmp = tempfile::tempdir().unwrap();
    let image = tmp.path().join("pic.png");
    std::fs::write(&image, [0x89, b'P', b'N', b'G']).unwrap();
    let add = Config {
        command_name: Some("add".to_string()),
        title: Some("X".to_string()),
        short_desc: Some("Y".to_string()),
        ingredients: vec!["A".to_string()],
        steps: vec!["B".to_string()],
        image: Some(image.to_string_lossy().to_string()),
        ..Default::default()
    };
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), add).unwrap(), 0);

    let doc = stored(tmp.path());
    let image = doc["recipes"][3]["image"].as_str().unwrap().to_string();
    assert_eq!(image, "data:image/png;base64,iVBORw==");
}

#[test]
fn test_data_dir_flag_overrides_store_location() {
    let tmp = tempfile::tempdir().unwrap();
    let elsewhere = tmp.path().join("elsewhere");
    let config = Config {
        data_dir: Some(elsewhere.to_string_lossy().to_string()),
        ..Default::default()
    };
    assert_eq!(run_app(tmp.path(), FakeEnv::default(), config).unwrap(), 0);
    assert!(elsewhere.join("my-recipes.json").is_file());
    assert!(!tmp.path().join("data").join("my-recipes.json").exists());
}

#[test]
fn test_corrupt_store_exits_with_data_error() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("data")).unwrap();
    std::fs::write(tmp.path().join("data/my-recipes.json"), "{oops").unwrap();
    let err = run_app(tmp.path(), FakeEnv::default(), Config::default()).unwrap_err();
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_one_shot_search_hits_configured_base_url() {
    let tmp = tempfile::tempdir().unwrap();
    let (base, handle) = serve_once(200, r#"{"meals":[{"idMeal":"52772","strMeal":"Teriyaki"}]}"#);
    let env = FakeEnv::default().with("RECIPES_MEALDB_URL", base);
    assert_eq!(run_app(tmp.path(), env, command("search", &["teriyaki"])).unwrap(), 0);
    assert_eq!(handle.join().unwrap(), "GET /search.php?s=teriyaki HTTP/1.1");
}

#[test]
fn test_desserts_failure_still_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let (base, handle) = serve_once(503, "busy");
    let env = FakeEnv::default().with("RECIPES_MEALDB_URL", base);
    assert_eq!(run_app(tmp.path(), env, command("desserts", &[])).unwrap(), 0);
    assert_eq!(handle.join().unwrap(), "GET /filter.php?c=Dessert HTTP/1.1");
}
