use fauxdict_testing::TestWorld;
use fauxdict_testing::assertions::{
    assert_all_entries_contain, assert_badge_level, assert_entry_count, assert_sequential_ids,
};
use fauxdict_testing::fixtures::SAMPLE_WORDS;

#[test]
fn test_list_pages_are_sequential() {
    let world = TestWorld::new().with_words(&SAMPLE_WORDS);

    let result = world
        .run(&["list", "--pages", "2", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success(), "list failed: {}", result.stderr());

    let json = result.json().expect("Parse failed");
    assert_entry_count(&json, 20).unwrap();
    assert_sequential_ids(&json).unwrap();
    assert_eq!(json["content"]["pagination"]["page_count"], 2);
    assert_eq!(json["content"]["pagination"]["continuation"], true);
    assert_eq!(json["content"]["fallback"], false);

    // Entries cycle through the source in order
    assert_eq!(json["content"]["entries"][4]["text"], SAMPLE_WORDS[0]);
}

#[test]
fn test_list_search_is_case_insensitive() {
    let world = TestWorld::new().with_words(&SAMPLE_WORDS);

    let result = world
        .run(&["list", "--search", "CAT", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    // First page holds ids 0..10: "cat" matches sources 0 and 2
    assert_entry_count(&json, 5).unwrap();
    assert_all_entries_contain(&json, "cat").unwrap();
    assert_eq!(json["content"]["total_loaded"], 10);
    assert_eq!(json["content"]["search_term"], "CAT");
}

#[test]
fn test_missing_payload_falls_back_and_finds_quantum() {
    let world = TestWorld::new();

    let result = world
        .run(&["list", "--search", "quantum", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_entry_count(&json, 1).unwrap();
    assert_eq!(json["content"]["entries"][0]["id"], 2);
    assert_eq!(json["content"]["fallback"], true);
    assert_badge_level(&json, "warning").unwrap();
}

#[test]
fn test_pagination_stops_at_cycle_cap() {
    let world = TestWorld::new().with_words(&["Zorp (n.): the only word"]);

    let result = world
        .run(&["list", "--pages", "50", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_entry_count(&json, 20).unwrap();
    assert_eq!(json["content"]["pagination"]["page_count"], 2);
    assert_eq!(json["content"]["pagination"]["continuation"], false);
}

#[test]
fn test_no_match_suggests_more_pages() {
    let world = TestWorld::new().with_words(&SAMPLE_WORDS);

    let result = world
        .run(&["list", "--search", "xyzzy", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_entry_count(&json, 0).unwrap();
    assert_eq!(
        json["suggestions"][0]["command"],
        "fauxdict list --pages 2"
    );
}

#[test]
fn test_custom_list_field_from_config() {
    let world = TestWorld::new();
    world.write_config("[source]\nlist_field = \"entries\"\n\n[paging]\nbatch_delay_ms = 0\n");
    world.write_payload(&fauxdict_testing::fixtures::payload_with_field(
        "entries",
        &["Flumph (n.): a polite jellyfish"],
    ));

    let result = world
        .run(&["list", "--format", "json"])
        .expect("Failed to run list");
    assert!(result.success());

    let json = result.json().expect("Parse failed");
    assert_eq!(json["content"]["fallback"], false);
    assert_all_entries_contain(&json, "flumph").unwrap();
}
