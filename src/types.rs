// Types listed here are either shared across multiple files and/or exposed via the library.

use crate::models::CompanyRecord;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the name of a company, as stored in the reference data, as an owned `String`.
pub type CompanyName = String;

/// A state or country a company is registered in.
pub type LocationName = String;

/// A company name after it has been run through the normalizer. This is the comparison
/// key used by the normalized-exact and fuzzy tiers.
pub type NormalizedCompanyName = String;

/// A similarity score in the inclusive range `0..=100`.
pub type MatchScore = u8;

/// The ordered list of company records a `ReferenceIndex` is built from.
pub type CompanyRecordList = Vec<CompanyRecord>;

/// Position of a record within the reference list. Used as the first-seen order.
pub type RecordIndex = usize;
