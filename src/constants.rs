use crate::types::MatchScore;

/// Legal / entity suffixes removed from the end of a company name during normalization.
///
/// Order matters: on each pass the first entry matching the current end of the name wins.
/// Every entry carries a leading space so that suffixes only match on a word boundary.
pub const COMPANY_NAME_SUFFIXES: &[&str] = &[
    " inc",
    " corporation",
    " corp",
    " ltd",
    " llc",
    " co",
    " common stock",
    " incorporated",
    " plc",
    " group",
    " holdings",
    " company",
    " companies",
    " lp",
    " ag",
    " sa",
    " nv",
    " spa",
    " srl",
    " limited",
    " the",
    " and",
    " of",
    " dba",
    " llp",
    " pty",
    " s p a",
    " s a",
];

/// Fuzzy-tier candidates scoring below this are discarded.
pub const MIN_CONFIDENCE_SCORE: MatchScore = 90;

/// Maximum number of candidates retained by the fuzzy tier (and reported back to callers).
pub const MAX_TOP_CANDIDATES: usize = 10;

/// Score assigned to the exact and normalized-exact tiers.
pub const EXACT_MATCH_SCORE: MatchScore = 100;

/// Ticker confidence reported whenever a ticker could be predicted.
pub const TICKER_CONFIDENCE_SCORE: MatchScore = 100;

pub const INVALID_INPUT_DIAGNOSTIC: &str = "invalid input";

pub const NO_CONFIDENT_MATCH_DIAGNOSTIC: &str = "no confident match";
