use company_matcher::{CompanyName, MatchResult, TickerSymbol};

/// A single row of an evaluation cases file.
#[derive(Debug, Clone)]
pub struct EvaluationCase {
    pub input_name: String,
    pub expected_name: Option<CompanyName>,
    pub expected_ticker: Option<TickerSymbol>,
}

#[derive(Debug, Clone)]
pub struct EvaluationFailure {
    pub case: EvaluationCase,
    pub matched_name: Option<CompanyName>,
    pub predicted_ticker: Option<TickerSymbol>,
    pub all_tickers: Vec<TickerSymbol>,
}

#[derive(Debug, Default)]
pub struct EvaluationResult {
    pub total: usize,
    pub correct_names: usize,
    pub correct_tickers: usize,
    pub failures: Vec<EvaluationFailure>,
}

impl EvaluationResult {
    /// Scores one case and folds it into the running totals.
    pub fn record(&mut self, case: &EvaluationCase, result: &MatchResult) {
        let name_match = Self::is_name_match(case, result);
        let ticker_match = Self::is_ticker_match(case, result);

        self.total += 1;

        if name_match {
            self.correct_names += 1;
        }

        if ticker_match {
            self.correct_tickers += 1;
        }

        if !name_match || !ticker_match {
            self.failures.push(EvaluationFailure {
                case: case.clone(),
                matched_name: result.matched_name.clone(),
                predicted_ticker: result.predicted_ticker.clone(),
                all_tickers: result.all_tickers.clone(),
            });
        }
    }

    /// Names match when both are present and equal after trimming and lower-casing.
    pub fn is_name_match(case: &EvaluationCase, result: &MatchResult) -> bool {
        match (&case.expected_name, &result.matched_name) {
            (Some(expected_name), Some(matched_name)) => {
                expected_name.trim().to_lowercase() == matched_name.trim().to_lowercase()
            }
            _ => false,
        }
    }

    /// A ticker matches when nothing was expected and nothing was predicted, or when the
    /// expected ticker is among all possible tickers.
    pub fn is_ticker_match(case: &EvaluationCase, result: &MatchResult) -> bool {
        match &case.expected_ticker {
            None => result.predicted_ticker.is_none() || result.all_tickers.is_empty(),
            Some(expected_ticker) => {
                result.predicted_ticker.is_some() && result.all_tickers.contains(expected_ticker)
            }
        }
    }

    pub fn name_accuracy(&self) -> f32 {
        Self::ratio(self.correct_names, self.total)
    }

    pub fn ticker_accuracy(&self) -> f32 {
        Self::ratio(self.correct_tickers, self.total)
    }

    fn ratio(correct: usize, total: usize) -> f32 {
        if total > 0 {
            correct as f32 / total as f32
        } else {
            0.0 // Handle edge case where there are no cases
        }
    }
}
