pub mod error;
pub use error::Error;

pub mod company_record;
pub use company_record::{CompanyRecord, NormalizedRecord};

pub mod company_record_list_preprocessor;
pub use company_record_list_preprocessor::CompanyRecordListPreprocessor;

pub mod reference_index;
pub use reference_index::ReferenceIndex;

pub mod reference_index_handle;
pub use reference_index_handle::ReferenceIndexHandle;

pub mod similarity_scorer;
pub use similarity_scorer::SimilarityScorer;

pub mod match_result;
pub use match_result::{Candidate, MatchResult, MatchTier};

pub mod ticker_resolver;
pub use ticker_resolver::{TickerResolution, TickerResolver};

pub mod company_matcher;
pub use company_matcher::CompanyMatcher;
pub(crate) use company_matcher::CompanyMatcherConfig;
