use folioview_core::{
    error_page, Action, DocumentSource, Effect, LoadError, PreferenceStore,
    SqlitePreferenceStore, Theme, ViewController, ViewError,
};
use std::io::Write;

fn write_document(dir: &tempfile::TempDir) -> DocumentSource {
    let path = dir.path().join("data.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        serde_json::json!({
            "profile": {
                "name": "Ada Dev",
                "title": "Systems Engineer",
                "bio": "Builds small sharp tools.",
                "image": "images/ada.png",
                "socialLinks": []
            },
            "filterCategories": [
                { "name": "All", "value": "all" },
                { "name": "Web", "value": "web" }
            ],
            "projects": [
                { "title": "Site", "description": "d", "image": "i.png", "category": "web" },
                { "title": "Poster", "description": "d", "image": "i.png", "category": "design" }
            ]
        })
        .to_string()
        .as_bytes(),
    )
    .unwrap();
    DocumentSource::Path(path)
}

#[test]
fn startup_renders_all_fragments_and_applies_default_filter() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_document(&dir);
    let controller =
        ViewController::start(&source, SqlitePreferenceStore::in_memory().unwrap()).unwrap();

    let markup = controller.page_html();
    assert!(markup.contains("profile-name"));
    assert!(markup.contains("class=\"filter-btn active\" data-filter=\"all\""));
    assert_eq!(markup.matches("<article class=\"project-card").count(), 2);

    // The explicit startup filter pass shows everything.
    assert_eq!(
        controller.initial_filter_effects(),
        vec![
            Effect::SetCardVisible {
                card: 0,
                visible: true
            },
            Effect::SetCardVisible {
                card: 1,
                visible: true
            }
        ]
    );
}

#[test]
fn startup_restores_the_saved_theme() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_document(&dir);

    let prefs = SqlitePreferenceStore::in_memory().unwrap();
    prefs.save_theme(Theme::Dark).unwrap();

    let controller = ViewController::start(&source, prefs).unwrap();
    assert_eq!(controller.theme(), Theme::Dark);
    assert!(controller.page_html().contains("data-color-scheme=\"dark\""));
}

#[test]
fn missing_document_fails_fast_with_only_the_error_page() {
    let dir = tempfile::tempdir().unwrap();
    let source = DocumentSource::Path(dir.path().join("absent.json"));

    let err = ViewController::start(&source, SqlitePreferenceStore::in_memory().unwrap())
        .unwrap_err();
    assert!(matches!(err, ViewError::Load(LoadError::Io { .. })));

    let markup = error_page();
    assert!(markup.contains("error-message"));
    assert!(!markup.contains("project-card"));
    assert!(!markup.contains("filter-btn"));
}

#[test]
fn malformed_document_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ViewController::start(
        &DocumentSource::Path(path),
        SqlitePreferenceStore::in_memory().unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, ViewError::Load(LoadError::Parse(_))));
}

#[test]
fn theme_toggle_persists_through_the_controller() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_document(&dir);
    let db_path = dir.path().join("prefs.sqlite3");

    {
        let prefs = SqlitePreferenceStore::open(&db_path).unwrap();
        let mut controller = ViewController::start(&source, prefs).unwrap();
        let effects = controller.dispatch(Action::ToggleTheme).unwrap();
        assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);
    }

    // A fresh session reads the toggled value back.
    let prefs = SqlitePreferenceStore::open(&db_path).unwrap();
    let controller = ViewController::start(&source, prefs).unwrap();
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn filtering_updates_card_visibility_and_survives_rerender() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_document(&dir);
    let mut controller =
        ViewController::start(&source, SqlitePreferenceStore::in_memory().unwrap()).unwrap();

    controller.dispatch(Action::SelectFilter("web".to_string())).unwrap();
    assert!(controller.is_card_visible(0));
    assert!(!controller.is_card_visible(1));

    // Full re-render replaces the page and rebuilds the card index.
    let markup = controller.render_full().to_string();
    assert!(markup.contains(
        "<article class=\"project-card hidden\" data-category=\"design\" style=\"display:none\">"
    ));
    assert!(controller.is_card_visible(0));
    assert!(!controller.is_card_visible(1));
}
