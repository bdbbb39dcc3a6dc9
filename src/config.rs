use crate::constants::{MAX_TOP_CANDIDATES, MIN_CONFIDENCE_SCORE};
use crate::models::CompanyMatcherConfig;

pub(crate) const DEFAULT_COMPANY_MATCHER_CONFIG: &CompanyMatcherConfig = &CompanyMatcherConfig {
    min_confidence_score: MIN_CONFIDENCE_SCORE,
    max_top_candidates: MAX_TOP_CANDIDATES,
};
