use fauxdict::presentation::presenters;
use fauxdict_types::{Entry, PaginationState, Preference};

#[test]
fn test_entry_list_snapshot() {
    let entry = Entry::new(0u64, "Blorft (n.): a soft thud");
    let state = PaginationState {
        page_count: 1,
        continuation: true,
        loading: false,
    };

    let result = presenters::present_entry_list(&[&entry], 10, "", state, false);

    insta::assert_json_snapshot!(result, @r#"
    {
      "content": {
        "entries": [
          {
            "id": 0,
            "text": "Blorft (n.): a soft thud"
          }
        ],
        "total_loaded": 10,
        "pagination": {
          "page_count": 1,
          "continuation": true,
          "loading": false
        },
        "fallback": false
      }
    }
    "#);
}

#[test]
fn test_theme_toggle_snapshot() {
    let result = presenters::present_theme(
        Preference::new(true),
        true,
        std::path::Path::new("/data/preferences.toml"),
    );

    insta::assert_json_snapshot!(result, @r#"
    {
      "badge": {
        "level": "success",
        "label": "Switched to dark mode"
      },
      "content": {
        "theme": "dark",
        "dark_mode": true,
        "toggled": true,
        "preference_path": "/data/preferences.toml"
      }
    }
    "#);
}
