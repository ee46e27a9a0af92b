use assert_cmd::Command;
use fauxdict_testing::TestWorld;
use fauxdict_testing::fixtures::{SAMPLE_WORDS, fallback_words};
use predicates::prelude::*;

#[test]
fn test_source_reports_payload() {
    let world = TestWorld::new().with_words(&SAMPLE_WORDS);

    let result = world
        .run(&["source", "--format", "json"])
        .expect("Failed to run source");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_eq!(json["content"]["origin"]["kind"], "payload");
    assert_eq!(json["content"]["size"], SAMPLE_WORDS.len());
    assert_eq!(json["badge"]["level"], "success");
}

#[test]
fn test_source_reports_fallback_reason() {
    let world = TestWorld::new();
    world.write_payload(r#"{"words": []}"#);

    let result = world.run(&["source", "--format", "json"]).unwrap();
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_eq!(json["content"]["origin"]["kind"], "fallback");
    assert!(json["content"]["origin"]["reason"].is_string());
    assert_eq!(json["content"]["size"], fallback_words().len());
    assert_eq!(json["content"]["sample"][0], fallback_words()[0]);
}

#[test]
fn test_source_flag_overrides_data_dir_payload() {
    let world = TestWorld::new().with_words(&SAMPLE_WORDS);
    let other = world.temp_dir().join("other.json");
    std::fs::write(&other, r#"{"words": ["Glimmick (n.): a shiny trick"]}"#).unwrap();

    let result = world
        .run(&["--source", other.to_str().unwrap(), "source", "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_eq!(json["content"]["size"], 1);
}

#[test]
#[allow(deprecated)]
fn test_plain_source_output() {
    let world = TestWorld::new();
    world.write_payload("not json");

    Command::cargo_bin("fauxdict")
        .unwrap()
        .arg("--data-dir")
        .arg(world.data_dir())
        .arg("source")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in fallback"))
        .stdout(predicate::str::contains("Entries: 10"));
}
