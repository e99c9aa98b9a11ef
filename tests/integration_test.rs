//! Integration tests for combodeck
//!
//! These tests drive the public API end to end: raw dataset text through
//! the catalogue into a browse session, persisted preferences on disk, and
//! deep links that restore a session.

use combodeck::browse::{
    BrowseSession, FilterTag, Intent, Key, Locator, MemoryPreferenceStore, MoveRow, MoveTier,
    PreferenceStore, TomlPreferenceStore, ViewMode,
};
use combodeck::catalogue::{Catalogue, IngestError};
use combodeck::combo::{ComboType, IconBases, MoveKind, RouteToken};
use combodeck::portraits;
use std::fs;
use tempfile::TempDir;

const DATASET: &str = r#"window.COMBOS_DATA = {
  "paul": [
    {
      "text": "d/f+1 ▶ d/f+2 ▶ b+3",
      "hits": "7 hits",
      "damage": "61 damages",
      "moves": [
        {"type": "img", "name": "d/f+1", "img": "df1.svg"},
        {"type": "img", "name": "d/f+2", "img": "df2.svg"},
        {"type": "text", "name": "b+3"}
      ]
    },
    {"text": "u/f+4 > Heat Burst > qcf+2", "hits": "10 hits", "damage": 72},
    {"text": "b+1+2 -> wall splat -> d/f+2", "hits": "3 hits"}
  ],
  "king": [],
  "lee": [
    {"text": "b+4 ▶ f,f+3", "hits": "4", "damage": "44"},
    {"text": "   "}
  ]
};"#;

fn catalogue() -> Catalogue {
    Catalogue::from_source_text(DATASET).unwrap()
}

fn session_with(prefs: Box<dyn PreferenceStore>, locator: &Locator) -> BrowseSession {
    BrowseSession::new(catalogue(), prefs, locator)
}

#[test]
fn test_dataset_normalizes_in_source_order() {
    let catalogue = catalogue();
    let ids: Vec<&str> = catalogue.ids().collect();
    assert_eq!(ids, vec!["paul", "lee"]);

    let paul = catalogue.get("paul").unwrap();
    let types: Vec<ComboType> = paul.combos.iter().map(|c| c.combo_type).collect();
    assert_eq!(types, vec![ComboType::Bnb, ComboType::Heat, ComboType::Wall]);
    assert_eq!(paul.combos[0].damage, 61);
    assert_eq!(paul.combos[1].damage, 72);
    assert_eq!(paul.combos[0].title, "BnB Route 1");
    assert_eq!(paul.combos[2].steps, vec!["b+1+2", "wall splat", "d/f+2"]);

    let lee = catalogue.get("lee").unwrap();
    assert_eq!(lee.combos[1].steps, vec!["Unknown route"]);
    assert_eq!(lee.combos[1].damage, 0);
}

#[test]
fn test_image_moves_carry_icons_and_fallbacks() {
    let catalogue = catalogue();
    let combo = &catalogue.get("paul").unwrap().combos[0];

    assert!(matches!(combo.moves[0].kind, MoveKind::Image(_)));
    assert!(matches!(combo.moves[2].kind, MoveKind::Text));

    let tokens = combo.route_tokens(&IconBases::default());
    match &tokens[0] {
        RouteToken::Icon { paths, label } => {
            assert_eq!(paths.primary, "./assets/inputs_png/df1.png");
            assert_eq!(paths.fallback, "./assets/inputs_svg/df1.svg");
            assert_eq!(label, "d/f+1");
        }
        RouteToken::Text(_) => panic!("expected an icon token"),
    }
    assert_eq!(tokens[2], RouteToken::Text("b+3".to_string()));
}

#[test]
fn test_unusable_dataset_falls_back() {
    assert!(matches!(
        Catalogue::from_source_text("{\"king\": []}"),
        Err(IngestError::NoCharacters)
    ));
    let fallback = Catalogue::or_fallback(Catalogue::from_source_text("not json"));
    assert_eq!(fallback.first_id(), Some("jin"));
    assert_eq!(fallback.get("jin").unwrap().combos[0].title, "Sample BnB");

    let dir = TempDir::new().unwrap();
    let missing = Catalogue::or_fallback(Catalogue::load(dir.path().join("combos.json")));
    assert_eq!(missing, Catalogue::fallback());
}

#[test]
fn test_browse_flow_keeps_selection_consistent() {
    let mut session = session_with(Box::new(MemoryPreferenceStore::new()), &Locator::default());

    let snapshot = session.dispatch(Intent::SetView(ViewMode::Deck));
    assert_eq!(snapshot.position_label(), "1 / 3");

    session.dispatch(Intent::Key(Key::ArrowRight));
    session.dispatch(Intent::Key(Key::ArrowRight));
    let snapshot = session.dispatch(Intent::Key(Key::ArrowRight));
    assert_eq!(snapshot.position_label(), "3 / 3");

    let snapshot = session.dispatch(Intent::SetFilter(FilterTag::Only(ComboType::Heat)));
    assert_eq!(snapshot.visible.len(), 1);
    assert_eq!(snapshot.active_index(), 0);
    assert_eq!(snapshot.active_combo().unwrap().title, "Heat Route 2");

    let snapshot = session.dispatch(Intent::SetSearch("zzz".into()));
    assert!(snapshot.visible.is_empty());
    assert_eq!(snapshot.status_message(), Some("No combos match this filter."));

    session.dispatch(Intent::SetSearch(String::new()));
    session.dispatch(Intent::SetFilter(FilterTag::All));
    session.dispatch(Intent::PointerDown { pointer: 1, x: 400.0 });
    session.dispatch(Intent::PointerMove { pointer: 1, x: 330.0 });
    let snapshot = session.dispatch(Intent::PointerUp { pointer: 1, x: 300.0 });
    assert_eq!(snapshot.active_index(), 1);
}

#[test]
fn test_move_table_tiers() {
    let mut session = session_with(Box::new(MemoryPreferenceStore::new()), &Locator::default());

    let snapshot = session.dispatch(Intent::SetMoveTier(MoveTier::Simple));
    assert_eq!(snapshot.move_rows.len(), 3);
    assert!(snapshot.move_rows.iter().all(|row| row.tier() == Some(MoveTier::Simple)));

    let snapshot = session.dispatch(Intent::SetMoveTier(MoveTier::Advanced));
    assert_eq!(snapshot.move_rows, vec![MoveRow::NoMatches]);
}

#[test]
fn test_preferences_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("preferences.toml");

    {
        let store = TomlPreferenceStore::open(&path);
        let mut session = session_with(Box::new(store), &Locator::default());
        session.dispatch(Intent::SelectCharacter("lee".into()));
        session.dispatch(Intent::SetView(ViewMode::Deck));
    }

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("lee"));
    assert!(contents.contains("deck"));

    let session = session_with(Box::new(TomlPreferenceStore::open(&path)), &Locator::default());
    assert_eq!(session.selection().character_id, "lee");
    assert_eq!(session.selection().view_mode, ViewMode::Deck);
}

#[test]
fn test_deep_link_round_trip_overrides_preferences() {
    let prefs = MemoryPreferenceStore::with_values([
        ("combodeck.last_character", "lee"),
        ("combodeck.view_mode", "grid"),
    ]);
    let mut session = session_with(Box::new(prefs), &Locator::default());
    assert_eq!(session.selection().character_id, "lee");

    session.dispatch(Intent::SelectCharacter("paul".into()));
    session.dispatch(Intent::GoTo(2));
    session.dispatch(Intent::SetView(ViewMode::Deck));
    let url = session.locator().to_url("https://combodeck.local/combos#top");
    assert_eq!(
        url,
        "https://combodeck.local/combos?character=paul&combo=3&view=deck"
    );

    let prefs = MemoryPreferenceStore::with_values([("combodeck.last_character", "lee")]);
    let restored = session_with(Box::new(prefs), &Locator::parse(&url));
    assert_eq!(restored.selection().character_id, "paul");
    assert_eq!(restored.selection().active_index, 2);
    assert_eq!(restored.selection().view_mode, ViewMode::Deck);
}

#[test]
fn test_portrait_plan_from_raw_dataset() {
    let raw = combodeck::catalogue::parse_source(DATASET).unwrap();
    let plan = portraits::plan_portraits(&raw, "assets/characters");
    let slugs: Vec<&str> = plan.targets.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, vec!["lee", "paul"]);
}
