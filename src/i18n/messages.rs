//! UI message templates with `{param}` placeholders.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::Language;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex is valid"));

const EN: &[(&str, &str)] = &[
    ("title", "ARC RAIDERS ITEM TRACKER"),
    ("subtitle", "Find which items you can recycle to get needed materials"),
    ("materialInput", "Material I need:"),
    ("materialPlaceholder", "e.g. Wires, Metal Parts, Chemicals..."),
    ("quantity", "Quantity:"),
    ("itemsProducing", "Items that produce {material}:"),
    ("noItemsFound", "No items found that produce {material}."),
    ("selectMaterial", "Select a material to see which items produce it."),
    ("loading", "Loading items..."),
    ("error", "Error: {error}"),
    ("recyclesTo", "Recycles to:"),
    ("sell", "Sell:"),
    ("perItem", "{quantity}x {material} per item"),
    ("itemsNeeded", "Recycle {count} to get {total}x {material}"),
    ("canRecycle", "Can recycle {count}x"),
    ("notEnough", "Not enough materials"),
    ("didYouMean", "Did you mean:"),
];

const DE: &[(&str, &str)] = &[
    ("title", "ARC RAIDERS ITEM TRACKER"),
    (
        "subtitle",
        "Finde welche Items du recyceln kannst, um benötigte Materialien zu bekommen",
    ),
    ("materialInput", "Material das ich brauche:"),
    ("materialPlaceholder", "z.B. Wires, Metal Parts, Chemicals..."),
    ("quantity", "Menge:"),
    ("itemsProducing", "Items die {material} liefern:"),
    ("noItemsFound", "Keine Items gefunden die {material} liefern."),
    (
        "selectMaterial",
        "Wähle ein Material aus, um zu sehen welche Items es liefern.",
    ),
    ("loading", "Lade Items..."),
    ("error", "Fehler: {error}"),
    ("recyclesTo", "Recycelt zu:"),
    ("sell", "Verkauf:"),
    ("perItem", "{quantity}x {material} pro Item"),
    ("itemsNeeded", "{count} recyceln für {total}x {material}"),
    ("canRecycle", "Kann {count}x recyceln"),
    ("notEnough", "Nicht genug Materialien"),
    ("didYouMean", "Meintest du:"),
];

fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::De => DE,
    }
}

/// Raw template for `key`, if the language defines it.
pub fn template(key: &str, lang: Language) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
}

/// Render the message `key` in `lang`.
///
/// Unknown keys render as the key itself. Placeholders without a matching
/// parameter render as an empty string.
pub fn t(key: &str, lang: Language, params: &[(&str, &str)]) -> String {
    let Some(template) = template(key, lang) else {
        return key.to_string();
    };
    if params.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            params
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message() {
        assert_eq!(t("loading", Language::De, &[]), "Lade Items...");
        assert_eq!(t("loading", Language::En, &[]), "Loading items...");
    }

    #[test]
    fn test_params_are_substituted() {
        assert_eq!(
            t("perItem", Language::En, &[("quantity", "3"), ("material", "Wires")]),
            "3x Wires per item"
        );
    }

    #[test]
    fn test_missing_param_renders_empty() {
        assert_eq!(t("error", Language::En, &[("other", "x")]), "Error: ");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(t("noSuchKey", Language::De, &[]), "noSuchKey");
    }

    #[test]
    fn test_languages_define_same_keys() {
        for (key, _) in EN {
            assert!(template(key, Language::De).is_some(), "missing de: {}", key);
        }
        assert_eq!(EN.len(), DE.len());
    }
}
