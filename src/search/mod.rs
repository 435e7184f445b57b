//! Material search: input sanitization, fuzzy ranking and live resolution.

mod debounce;
mod fuzzy;
mod resolve;
mod sanitize;

pub use self::debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use self::fuzzy::{
    match_tier, rank_materials, Candidate, MatchTier, QueryMatcher, RankedMatch,
};
pub use self::resolve::{resolve, Resolution};
pub use self::sanitize::{highlight, sanitize_query, DEFAULT_MAX_QUERY_LEN};

/// Default cap on autocomplete entries.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default minimum query length before live resolution kicks in.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
