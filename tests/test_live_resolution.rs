use std::time::{Duration, Instant};

use salvage_lookup::config::SearchConfig;
use salvage_lookup::{
    Item, Language, LookupSession, MaterialLookup, Rarity, Resolution, TranslationTables,
};

async fn session() -> LookupSession {
    MaterialLookup::builder()
        .items(vec![
            Item::new("Toaster", Rarity::Common, "1x Wires, 2x Metal Parts"),
            Item::new("Drone Core", Rarity::Rare, "2x Mechanical Components"),
            Item::new("Radio", Rarity::Uncommon, "3x Wires"),
        ])
        .language(Language::En)
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_ambiguous_prefix_keeps_typing() {
    let mut session = session().await;
    let start = Instant::now();

    session.input("Me", start);
    let resolution = session.poll(start + Duration::from_millis(300)).unwrap();
    match resolution {
        Resolution::Ambiguous(matches) => {
            let materials: Vec<&str> = matches.iter().map(|m| m.material.as_str()).collect();
            assert_eq!(materials, vec!["Mechanical Components", "Metal Parts"]);
        }
        other => panic!("Expected ambiguous resolution, got {:?}", other),
    }
    assert!(session.selection().is_empty());
}

#[tokio::test]
async fn test_unique_prefix_selects_after_delay() {
    let mut session = session().await;
    let start = Instant::now();

    session.input("Met", start);
    assert!(session.has_pending_input());
    assert_eq!(session.poll(start + Duration::from_millis(299)), None);

    let resolution = session.poll(start + Duration::from_millis(300));
    assert_eq!(resolution, Some(Resolution::Selected("Metal Parts".to_string())));
    assert_eq!(session.selection().material, "Metal Parts");
    assert!(!session.has_pending_input());

    let results = session.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item.name, "Toaster");
}

#[tokio::test]
async fn test_later_keystroke_replaces_pending_query() {
    let mut session = session().await;
    let start = Instant::now();

    session.input("Me", start);
    session.input("Met", start + Duration::from_millis(200));

    // the first deadline passed, but it was rescheduled
    assert_eq!(session.poll(start + Duration::from_millis(300)), None);
    let resolution = session.poll(start + Duration::from_millis(500)).unwrap();
    assert_eq!(resolution.selected(), Some("Metal Parts"));
}

#[tokio::test]
async fn test_short_query_does_not_select() {
    let mut session = session().await;
    let start = Instant::now();

    session.input("W", start);
    assert_eq!(
        session.poll(start + Duration::from_secs(1)),
        Some(Resolution::TooShort)
    );
    assert!(session.selection().is_empty());
}

#[tokio::test]
async fn test_localized_name_resolves_to_canonical() {
    let tables = TranslationTables::from_json(
        r#"{"materials": {"Wires": "Drähte", "Metal Parts": "Metallteile"}}"#,
    )
    .unwrap();
    let mut session = MaterialLookup::builder()
        .items(vec![Item::new(
            "Toaster",
            Rarity::Common,
            "1x Wires, 2x Metal Parts",
        )])
        .translations(tables)
        .language(Language::De)
        .build()
        .await
        .unwrap();

    let resolution = session.resolve_now("dräh");
    assert_eq!(resolution.selected(), Some("Wires"));
    assert_eq!(session.selection().material, "Wires");
}

#[tokio::test]
async fn test_custom_debounce_delay() {
    let mut session = MaterialLookup::builder()
        .items(vec![Item::new("Radio", Rarity::Uncommon, "3x Wires")])
        .search_config(SearchConfig {
            debounce_ms: 50,
            ..SearchConfig::default()
        })
        .build()
        .await
        .unwrap();
    let start = Instant::now();

    session.input("Wir", start);
    assert_eq!(
        session.poll(start + Duration::from_millis(50)),
        Some(Resolution::Selected("Wires".to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn test_debounce_with_tokio_clock() {
    let mut session = session().await;

    session.input("Met", tokio::time::Instant::now().into_std());
    tokio::time::advance(Duration::from_millis(100)).await;
    assert_eq!(session.poll(tokio::time::Instant::now().into_std()), None);

    tokio::time::advance(Duration::from_millis(200)).await;
    let resolution = session.poll(tokio::time::Instant::now().into_std());
    assert_eq!(
        resolution.as_ref().and_then(Resolution::selected),
        Some("Metal Parts")
    );
}
