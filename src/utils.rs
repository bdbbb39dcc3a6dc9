pub mod dedup_ticker_symbols;
pub use dedup_ticker_symbols::dedup_ticker_symbols;

pub mod indel_similarity;
pub use indel_similarity::{indel_similarity, longest_common_subsequence_length};

pub mod normalize_company_name;
pub use normalize_company_name::normalize_company_name;

pub mod sort_candidates;
pub use sort_candidates::sort_candidates;
