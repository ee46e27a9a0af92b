use fauxdict_testing::TestWorld;

#[test]
fn test_theme_defaults_to_light() {
    let world = TestWorld::new();

    let result = world
        .run(&["theme", "--format", "json"])
        .expect("Failed to run theme");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_eq!(json["content"]["theme"], "light");
    assert_eq!(json["content"]["toggled"], false);
    assert!(!world.preference_file().exists());
}

#[test]
fn test_toggle_twice_restores_preference() {
    let world = TestWorld::new();

    let first = world
        .run(&["theme", "toggle", "--format", "json"])
        .expect("Failed to toggle");
    assert!(first.success(), "toggle failed: {}", first.stderr());
    assert_eq!(first.json().unwrap()["content"]["dark_mode"], true);

    let stored = std::fs::read_to_string(world.preference_file()).unwrap();
    assert!(stored.contains("darkMode = true"));

    let shown = world.run(&["theme", "show", "--format", "json"]).unwrap();
    assert_eq!(shown.json().unwrap()["content"]["theme"], "dark");

    let second = world.run(&["theme", "toggle", "--format", "json"]).unwrap();
    assert_eq!(second.json().unwrap()["content"]["dark_mode"], false);

    let stored = std::fs::read_to_string(world.preference_file()).unwrap();
    assert!(stored.contains("darkMode = false"));
}

#[test]
fn test_malformed_preference_reads_as_light() {
    let world = TestWorld::new();
    std::fs::write(world.preference_file(), "darkMode = \"sometimes\"").unwrap();

    let result = world.run(&["theme", "--format", "json"]).unwrap();
    assert!(result.success());
    assert_eq!(result.json().unwrap()["content"]["dark_mode"], false);
}
