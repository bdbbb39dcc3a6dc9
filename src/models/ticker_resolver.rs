use crate::constants::{MAX_TOP_CANDIDATES, TICKER_CONFIDENCE_SCORE};
use crate::models::Candidate;
use crate::types::{MatchScore, TickerSymbol};
use crate::utils::dedup_ticker_symbols;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerResolution {
    pub predicted_ticker: Option<TickerSymbol>,
    pub all_tickers: Vec<TickerSymbol>,
    pub ticker_confidence: Option<MatchScore>,
    pub top_candidates: Vec<Candidate>,
}

pub struct TickerResolver {}

impl TickerResolver {
    /// Picks one ticker out of a set of equally trusted candidates.
    ///
    /// Candidates are walked in the order the matching tier produced them. The predicted
    /// ticker belongs to the first ticker-carrying candidate whose lower-cased title
    /// contains the lower-cased, trimmed raw query. If no title contains the query, the
    /// first ticker-carrying candidate wins.
    ///
    /// `all_tickers` holds every non-empty ticker across the candidates, deduplicated in
    /// first-seen order, so the predicted ticker is always one of them.
    pub fn resolve(candidates: &[Candidate], raw_query: &str) -> TickerResolution {
        let all_tickers = dedup_ticker_symbols(candidates.iter().map(|c| c.ticker.as_ref()));

        let query = raw_query.trim().to_lowercase();

        let mut ticker_candidates = candidates
            .iter()
            .filter(|candidate| Self::has_ticker(candidate));

        let predicted_ticker = ticker_candidates
            .clone()
            .find(|candidate| candidate.title.to_lowercase().contains(&query))
            .or_else(|| ticker_candidates.next())
            .and_then(|candidate| candidate.ticker.clone());

        debug!(
            "Resolved ticker {:?} out of {:?} for query {:?}",
            predicted_ticker, all_tickers, raw_query
        );

        let ticker_confidence = predicted_ticker.as_ref().map(|_| TICKER_CONFIDENCE_SCORE);

        TickerResolution {
            predicted_ticker,
            all_tickers,
            ticker_confidence,
            top_candidates: candidates.iter().take(MAX_TOP_CANDIDATES).cloned().collect(),
        }
    }

    fn has_ticker(candidate: &Candidate) -> bool {
        candidate
            .ticker
            .as_ref()
            .map_or(false, |ticker| !ticker.trim().is_empty())
    }
}
