use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Matcher, Utf32Str};
use serde::Serialize;

/// How well a query matched a name. Later variants are better matches, so
/// `Exact > Prefix > Substring > Subsequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MatchTier {
    Subsequence,
    Substring,
    Prefix,
    Exact,
}

/// A material offered to the matcher: its canonical name and the name shown
/// to the user (identical when no translation applies).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub canonical: String,
    pub display: String,
}

impl Candidate {
    pub fn new(canonical: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            display: display.into(),
        }
    }

    /// Candidate without a localized name.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display: name.clone(),
            canonical: name,
        }
    }

    /// Best tier across the canonical and display names.
    pub fn tier(&self, matcher: &mut QueryMatcher) -> Option<MatchTier> {
        let canonical = matcher.tier(&self.canonical);
        if self.display == self.canonical {
            return canonical;
        }
        canonical.max(matcher.tier(&self.display))
    }
}

/// A ranked autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    pub material: String,
    pub display: String,
    pub tier: MatchTier,
}

/// One query prepared for matching against many names.
///
/// Exact, prefix and substring tiers compare lowercased strings. The
/// subsequence tier is a nucleo fuzzy match that ignores case and folds
/// diacritics, so `drahte` still finds `Drähte`.
pub struct QueryMatcher {
    lowered: String,
    atom: Option<Atom>,
    matcher: Matcher,
    buf: Vec<char>,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        let atom = (!query.is_empty()).then(|| {
            Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
                false,
            )
        });
        Self {
            lowered: query.to_lowercase(),
            atom,
            matcher: Matcher::default(),
            buf: Vec::new(),
        }
    }

    /// Classify how the query matches `text`. An empty query matches nothing.
    pub fn tier(&mut self, text: &str) -> Option<MatchTier> {
        let atom = self.atom.as_ref()?;
        let text_lower = text.to_lowercase();

        if text_lower == self.lowered {
            return Some(MatchTier::Exact);
        }
        if text_lower.starts_with(&self.lowered) {
            return Some(MatchTier::Prefix);
        }
        if text_lower.contains(&self.lowered) {
            return Some(MatchTier::Substring);
        }

        let haystack = Utf32Str::new(text, &mut self.buf);
        atom.score(haystack, &mut self.matcher).map(|_| MatchTier::Subsequence)
    }
}

/// Classify how `query` matches `text`, case-insensitively.
/// An empty query matches nothing.
pub fn match_tier(query: &str, text: &str) -> Option<MatchTier> {
    QueryMatcher::new(query).tier(text)
}

/// Rank candidates against `query`, best tier first, ties in candidate
/// order, keeping at most `limit` entries.
pub fn rank_materials(query: &str, candidates: &[Candidate], limit: usize) -> Vec<RankedMatch> {
    let mut matcher = QueryMatcher::new(query);
    let mut ranked: Vec<RankedMatch> = candidates
        .iter()
        .filter_map(|candidate| {
            candidate.tier(&mut matcher).map(|tier| RankedMatch {
                material: candidate.canonical.clone(),
                display: candidate.display.clone(),
                tier,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.tier.cmp(&a.tier));
    ranked.truncate(limit);
    ranked
}
