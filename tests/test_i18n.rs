use std::io::Write;

use salvage_lookup::i18n::{self, messages};
use salvage_lookup::{Item, Language, MaterialLookup, NameKind, Rarity, TranslationTables};

#[test]
fn test_every_english_key_has_german_text() {
    let keys = [
        "title",
        "subtitle",
        "materialInput",
        "materialPlaceholder",
        "quantity",
        "itemsProducing",
        "noItemsFound",
        "selectMaterial",
        "loading",
        "error",
        "recyclesTo",
        "sell",
        "perItem",
        "itemsNeeded",
        "canRecycle",
        "notEnough",
        "didYouMean",
    ];
    for key in keys {
        assert!(messages::template(key, Language::En).is_some(), "en: {}", key);
        assert!(messages::template(key, Language::De).is_some(), "de: {}", key);
    }
}

#[test]
fn test_message_interpolation() {
    assert_eq!(
        i18n::t(
            "itemsNeeded",
            Language::En,
            &[("count", "4"), ("total", "10"), ("material", "Wires")]
        ),
        "Recycle 4 to get 10x Wires"
    );
    assert_eq!(
        i18n::t("perItem", Language::De, &[("quantity", "3"), ("material", "Drähte")]),
        "3x Drähte pro Item"
    );
    assert_eq!(i18n::t("noSuchKey", Language::De, &[]), "noSuchKey");
}

#[test]
fn test_translate_falls_back_to_canonical() {
    let tables = TranslationTables::german().merge(
        TranslationTables::from_json(r#"{"items": {"Toaster": "Toaster (DE)"}}"#).unwrap(),
    );
    assert_eq!(tables.translate("Toaster", NameKind::Item, Language::De), "Toaster (DE)");
    assert_eq!(tables.translate("Toaster", NameKind::Item, Language::En), "Toaster");
    assert_eq!(tables.translate("Radio", NameKind::Item, Language::De), "Radio");
    assert_eq!(
        tables.translate("Uncomon", NameKind::Rarity, Language::De),
        "Ungewöhnlich"
    );
    assert_eq!(
        tables.translate("Recyclable", NameKind::Category, Language::De),
        "Recycelbar"
    );
}

#[test]
fn test_language_parsing_and_detection() {
    assert_eq!("DE".parse::<Language>(), Ok(Language::De));
    assert!("fr".parse::<Language>().is_err());
    assert_eq!(Language::detect(Some("de_CH.UTF-8")), Language::De);
    assert_eq!(Language::detect(Some("en_GB")), Language::En);
    assert_eq!(Language::detect(None), Language::En);
    assert_eq!(Language::De.to_string(), "de");
}

#[tokio::test]
async fn test_session_uses_translations_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(r#"{"materials": {"Wires": "Drähte"}}"#.as_bytes())
        .unwrap();

    let mut session = MaterialLookup::builder()
        .items(vec![Item::new("Radio", Rarity::Rare, "3x Wires")])
        .translations_file(file.path())
        .language(Language::De)
        .build()
        .await
        .unwrap();

    assert_eq!(session.display_name("Wires", NameKind::Material), "Drähte");
    assert_eq!(session.display_name("Rare", NameKind::Rarity), "Selten");
    assert_eq!(
        session.message("itemsProducing", &[("material", "Drähte")]),
        "Items die Drähte liefern:"
    );

    // the catalog keeps canonical names
    assert_eq!(session.materials(), &["Wires"]);

    session.set_language(Language::En);
    assert_eq!(session.display_name("Wires", NameKind::Material), "Wires");
}

#[tokio::test]
async fn test_missing_translations_file_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let result = MaterialLookup::builder()
        .items(vec![])
        .translations_file(dir.path().join("nope.json"))
        .build()
        .await;
    assert!(result.is_err());
}
