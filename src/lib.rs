mod config;
mod constants;
pub use constants::{MAX_TOP_CANDIDATES, MIN_CONFIDENCE_SCORE};
pub mod models;
pub use models::{
    Candidate, CompanyMatcher, CompanyRecord, CompanyRecordListPreprocessor, Error, MatchResult,
    MatchTier, NormalizedRecord, ReferenceIndex, ReferenceIndexHandle, SimilarityScorer,
    TickerResolution, TickerResolver,
};
pub mod types;
mod utils;
pub use types::{
    CompanyName, CompanyRecordList, LocationName, MatchScore, NormalizedCompanyName,
    TickerSymbol,
};
pub use utils::normalize_company_name;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds the immutable reference index every query is matched against.
///
/// Called once at start-up and again whenever the reference data set is refreshed. For a
/// process-wide, swappable index, see `ReferenceIndexHandle`.
pub fn load_reference(company_record_list: CompanyRecordList) -> ReferenceIndex {
    ReferenceIndex::build(company_record_list)
}

/// Resolves a free-text company name to a reference record and its ticker(s).
///
/// Always returns a `MatchResult`; queries which are empty, or which no tier could resolve
/// with enough confidence, come back unresolved with a diagnostic.
pub fn match_company_name(query: &str, reference_index: &ReferenceIndex) -> MatchResult {
    CompanyMatcher::new(reference_index).match_company_name(query)
}
