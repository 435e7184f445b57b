use serde::Serialize;

use super::fuzzy::{rank_materials, Candidate, MatchTier, QueryMatcher, RankedMatch};

/// Outcome of live resolution for a partially typed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// Query is shorter than the minimum length; nothing was evaluated.
    TooShort,
    /// Exactly one material matched; select it.
    Selected(String),
    /// No unique match; the user has to pick from the ranked list.
    Ambiguous(Vec<RankedMatch>),
}

impl Resolution {
    pub fn selected(&self) -> Option<&str> {
        match self {
            Resolution::Selected(material) => Some(material),
            _ => None,
        }
    }
}

/// Resolve `query` to a single material if it is unambiguous.
///
/// A unique exact match (canonical or display name) wins; otherwise a unique
/// prefix match wins. `limit` caps the ranked list carried by `Ambiguous`.
pub fn resolve(query: &str, candidates: &[Candidate], min_len: usize, limit: usize) -> Resolution {
    let query = query.trim();
    if query.chars().count() < min_len {
        return Resolution::TooShort;
    }

    if let Some(material) = unique_with_tier(query, candidates, MatchTier::Exact) {
        return Resolution::Selected(material);
    }
    if let Some(material) = unique_with_tier(query, candidates, MatchTier::Prefix) {
        return Resolution::Selected(material);
    }

    Resolution::Ambiguous(rank_materials(query, candidates, limit))
}

/// The only candidate whose best match is at least `tier`, if there is
/// exactly one.
fn unique_with_tier(query: &str, candidates: &[Candidate], tier: MatchTier) -> Option<String> {
    let mut matcher = QueryMatcher::new(query);
    let mut matching = candidates
        .iter()
        .filter(|candidate| candidate.tier(&mut matcher).is_some_and(|t| t >= tier));

    let first = matching.next()?;
    if matching.next().is_some() {
        return None;
    }
    Some(first.canonical.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<Candidate> {
        vec![
            Candidate::plain("Mechanical Components"),
            Candidate::plain("Metal Parts"),
            Candidate::plain("Wires"),
        ]
    }

    #[test]
    fn test_unique_prefix_selects() {
        assert_eq!(
            resolve("Met", &vocabulary(), 2, 10),
            Resolution::Selected("Metal Parts".to_string())
        );
    }

    #[test]
    fn test_shared_prefix_is_ambiguous() {
        match resolve("Me", &vocabulary(), 2, 10) {
            Resolution::Ambiguous(ranked) => {
                let names: Vec<_> = ranked.iter().map(|m| m.material.as_str()).collect();
                assert!(names.contains(&"Metal Parts"));
                assert!(names.contains(&"Mechanical Components"));
            }
            other => panic!("expected ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_beats_longer_prefix() {
        let candidates = vec![Candidate::plain("Oil"), Candidate::plain("Oil Filter")];
        assert_eq!(
            resolve("oil", &candidates, 2, 10),
            Resolution::Selected("Oil".to_string())
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(resolve("W", &vocabulary(), 2, 10), Resolution::TooShort);
        assert_eq!(resolve("  ", &vocabulary(), 2, 10), Resolution::TooShort);
    }

    #[test]
    fn test_no_match_is_ambiguous_and_empty() {
        assert_eq!(
            resolve("zzz", &vocabulary(), 2, 10),
            Resolution::Ambiguous(Vec::new())
        );
    }

    #[test]
    fn test_localized_name_resolves_to_canonical() {
        let candidates = vec![
            Candidate::new("Wires", "Drähte"),
            Candidate::new("Metal Parts", "Metallteile"),
        ];
        assert_eq!(
            resolve("dräh", &candidates, 2, 10),
            Resolution::Selected("Wires".to_string())
        );
    }
}
