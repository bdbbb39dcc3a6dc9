use crate::constants::{INVALID_INPUT_DIAGNOSTIC, NO_CONFIDENT_MATCH_DIAGNOSTIC};
use crate::models::company_record::is_known_location;
use crate::models::CompanyRecord;
use crate::types::{CompanyName, LocationName, MatchScore, TickerSymbol};
use std::fmt;

/// The tier which resolved a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Raw query equals a raw reference title.
    Exact,
    /// Normalized query equals a normalized reference title.
    NormalizedExact,
    /// Similarity scoring over every normalized reference title.
    Fuzzy,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact"),
            MatchTier::NormalizedExact => write!(f, "normalized-exact"),
            MatchTier::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A scored reference record considered while resolving a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: CompanyName,
    pub ticker: Option<TickerSymbol>,
    pub state: Option<LocationName>,
    pub country: Option<LocationName>,
    pub score: MatchScore,
}

impl Candidate {
    pub fn from_record(record: &CompanyRecord, score: MatchScore) -> Self {
        Candidate {
            title: record.title.clone(),
            ticker: record.ticker.clone(),
            state: record.state.clone(),
            country: record.country.clone(),
            score,
        }
    }
}

/// Outcome of matching a query against a reference index.
///
/// Unresolved results carry no name, no tickers and a diagnostic explaining why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched_name: Option<CompanyName>,
    pub predicted_ticker: Option<TickerSymbol>,
    pub all_tickers: Vec<TickerSymbol>,
    pub state: Option<LocationName>,
    pub country: Option<LocationName>,
    pub match_score: MatchScore,
    pub ticker_confidence: Option<MatchScore>,
    pub diagnostic: Option<String>,
    pub top_candidates: Vec<Candidate>,
    pub match_tier: Option<MatchTier>,
}

impl MatchResult {
    pub fn unresolved(diagnostic: &str) -> Self {
        MatchResult {
            matched_name: None,
            predicted_ticker: None,
            all_tickers: vec![],
            state: None,
            country: None,
            match_score: 0,
            ticker_confidence: None,
            diagnostic: Some(diagnostic.to_string()),
            top_candidates: vec![],
            match_tier: None,
        }
    }

    pub fn invalid_input() -> Self {
        Self::unresolved(INVALID_INPUT_DIAGNOSTIC)
    }

    pub fn no_confident_match() -> Self {
        Self::unresolved(NO_CONFIDENT_MATCH_DIAGNOSTIC)
    }

    pub fn is_resolved(&self) -> bool {
        self.matched_name.is_some()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let matched_name = match &self.matched_name {
            Some(matched_name) => matched_name,
            None => {
                return write!(
                    f,
                    "Matched: None ({})",
                    self.diagnostic.as_deref().unwrap_or(NO_CONFIDENT_MATCH_DIAGNOSTIC)
                )
            }
        };

        writeln!(f, "Matched: {}", matched_name)?;
        writeln!(
            f,
            "Predicted Ticker: {}",
            self.predicted_ticker.as_deref().unwrap_or("None")
        )?;

        // Only the matched record's location is shown, and only when it is known
        for (label, value) in [("State", &self.state), ("Country", &self.country)] {
            if let Some(value) = value.as_deref().filter(|value| is_known_location(value)) {
                writeln!(f, "{}: {}", label, value)?;
            }
        }

        writeln!(f, "Company Match Score: {}", self.match_score)?;
        write!(
            f,
            "Ticker Match Score: {}",
            self.ticker_confidence
                .map_or_else(|| "None".to_string(), |score| score.to_string())
        )?;

        if self.all_tickers.len() > 1 {
            write!(f, "\nAll Possible Tickers: {}", self.all_tickers.join(", "))?;
        }

        Ok(())
    }
}
