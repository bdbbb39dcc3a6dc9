use crate::config::DEFAULT_COMPANY_MATCHER_CONFIG;
use crate::constants::EXACT_MATCH_SCORE;
use crate::models::{
    Candidate, CompanyRecord, MatchResult, MatchTier, ReferenceIndex, SimilarityScorer,
    TickerResolver,
};
use crate::types::MatchScore;
use crate::utils::{normalize_company_name, sort_candidates};
use crate::Error;
use log::{debug, info, warn};

pub(crate) struct CompanyMatcherConfig {
    pub min_confidence_score: MatchScore,
    pub max_top_candidates: usize,
}

/// Resolves queries against a `ReferenceIndex` by trying, in strict order, the exact,
/// normalized-exact and fuzzy tiers. The first tier with at least one hit decides the
/// result; later tiers are never consulted.
///
/// The matcher only borrows the index and never mutates it, so any number of matchers
/// may run concurrently over the same index.
pub struct CompanyMatcher<'a> {
    config: &'a CompanyMatcherConfig,
    reference_index: &'a ReferenceIndex,
}

impl<'a> CompanyMatcher<'a> {
    pub fn new(reference_index: &'a ReferenceIndex) -> Self {
        Self::with_config(DEFAULT_COMPANY_MATCHER_CONFIG, reference_index)
    }

    pub(crate) fn with_config(
        config: &'a CompanyMatcherConfig,
        reference_index: &'a ReferenceIndex,
    ) -> Self {
        CompanyMatcher {
            config,
            reference_index,
        }
    }

    pub fn match_company_name(&self, query: &str) -> MatchResult {
        if let Err(err) = Self::validate_query(query) {
            info!("Rejecting query {:?}: {}", query, err);
            return MatchResult::invalid_input();
        }

        if let Some(candidates) = self.match_exact(query) {
            return Self::resolve(MatchTier::Exact, candidates, query);
        }

        let normalized_query = normalize_company_name(query);
        if normalized_query.is_empty() {
            info!("Query {:?} normalizes to nothing", query);
            return MatchResult::no_confident_match();
        }

        if let Some(candidates) = self.match_normalized_exact(&normalized_query) {
            return Self::resolve(MatchTier::NormalizedExact, candidates, query);
        }

        if let Some(candidates) = self.match_fuzzy(&normalized_query) {
            return Self::resolve(MatchTier::Fuzzy, candidates, query);
        }

        info!(
            "No strong matches (score >= {}) found for {:?}",
            self.config.min_confidence_score, query
        );

        MatchResult::no_confident_match()
    }

    /// Queries must contain at least one non-whitespace character.
    pub fn validate_query(query: &str) -> Result<(), Error> {
        if query.trim().is_empty() {
            return Err(Error::InvalidInput("query is empty".to_string()));
        }

        Ok(())
    }

    fn match_exact(&self, query: &str) -> Option<Vec<Candidate>> {
        self.reference_index
            .exact_lookup(query)
            .first()
            .map(|record| vec![Self::exact_candidate(record)])
    }

    fn match_normalized_exact(&self, normalized_query: &str) -> Option<Vec<Candidate>> {
        let records = self.reference_index.normalized_lookup(normalized_query);
        if records.is_empty() {
            return None;
        }

        Some(records.into_iter().map(Self::exact_candidate).collect())
    }

    fn match_fuzzy(&self, normalized_query: &str) -> Option<Vec<Candidate>> {
        let mut candidates: Vec<Candidate> = Vec::new();

        for (normalized_title, record) in self.reference_index.all_normalized_titles() {
            match self.score_record(normalized_query, normalized_title, record) {
                Ok(candidate) => candidates.push(candidate),
                Err(err) => warn!("Skipping reference record {:?}: {}", record.title, err),
            }
        }

        sort_candidates(&mut candidates);
        candidates.truncate(self.config.max_top_candidates);
        candidates.retain(|candidate| candidate.score >= self.config.min_confidence_score);

        debug!(
            "Fuzzy tier kept {} candidates for {:?}",
            candidates.len(),
            normalized_query
        );

        if candidates.is_empty() {
            None
        } else {
            Some(candidates)
        }
    }

    /// Scores below the confidence threshold are not computed exactly and come back as 0.
    fn score_record(
        &self,
        normalized_query: &str,
        normalized_title: &str,
        record: &CompanyRecord,
    ) -> Result<Candidate, Error> {
        if record.title.trim().is_empty() {
            return Err(Error::ReferenceRecordDefect(
                "record has an empty title".to_string(),
            ));
        }

        if normalized_title.is_empty() {
            return Err(Error::ReferenceRecordDefect(format!(
                "title {:?} normalizes to nothing",
                record.title
            )));
        }

        let score = SimilarityScorer::score_with_cutoff(
            normalized_query,
            normalized_title,
            self.config.min_confidence_score,
        );

        Ok(Candidate::from_record(record, score))
    }

    fn exact_candidate(record: &CompanyRecord) -> Candidate {
        Candidate::from_record(record, EXACT_MATCH_SCORE)
    }

    /// Candidates arrive best-first, so the first one names the match.
    fn resolve(match_tier: MatchTier, candidates: Vec<Candidate>, query: &str) -> MatchResult {
        let best_candidate = match candidates.first() {
            Some(best_candidate) => best_candidate.clone(),
            None => return MatchResult::no_confident_match(),
        };

        debug!(
            "Resolved {:?} to {:?} via {} tier (score {})",
            query, best_candidate.title, match_tier, best_candidate.score
        );

        let ticker_resolution = TickerResolver::resolve(&candidates, query);

        MatchResult {
            matched_name: Some(best_candidate.title),
            predicted_ticker: ticker_resolution.predicted_ticker,
            all_tickers: ticker_resolution.all_tickers,
            state: best_candidate.state,
            country: best_candidate.country,
            match_score: best_candidate.score,
            ticker_confidence: ticker_resolution.ticker_confidence,
            diagnostic: None,
            top_candidates: ticker_resolution.top_candidates,
            match_tier: Some(match_tier),
        }
    }
}
