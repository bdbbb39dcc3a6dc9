use crate::types::{CompanyName, LocationName, NormalizedCompanyName, TickerSymbol};
use crate::utils::normalize_company_name;

/// A single row of the reference data: a company title and, optionally, its ticker symbol
/// and the state and country it is registered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub title: CompanyName,
    pub ticker: Option<TickerSymbol>,
    pub state: Option<LocationName>,
    pub country: Option<LocationName>,
}

impl CompanyRecord {
    pub fn new(title: &str, ticker: Option<&str>) -> Self {
        CompanyRecord {
            title: title.to_string(),
            ticker: ticker
                .map(|ticker| ticker.trim())
                .filter(|ticker| !ticker.is_empty())
                .map(|ticker| ticker.to_string()),
            state: None,
            country: None,
        }
    }

    /// Attaches a state and country. Placeholder values (see `is_known_location`) are dropped.
    pub fn with_location(mut self, state: Option<&str>, country: Option<&str>) -> Self {
        self.state = Self::known_location(state);
        self.country = Self::known_location(country);
        self
    }

    fn known_location(value: Option<&str>) -> Option<LocationName> {
        value
            .map(|value| value.trim())
            .filter(|value| is_known_location(value))
            .map(|value| value.to_string())
    }
}

/// False for blank location cells and the `none` / `nan` placeholders exported by
/// spreadsheet tooling.
pub fn is_known_location(value: &str) -> bool {
    let value = value.trim();

    !value.is_empty()
        && !value.eq_ignore_ascii_case("none")
        && !value.eq_ignore_ascii_case("nan")
}

/// A `CompanyRecord` paired with its precomputed normalized title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub normalized_title: NormalizedCompanyName,
    pub source: CompanyRecord,
}

impl NormalizedRecord {
    pub fn new(source: CompanyRecord) -> Self {
        NormalizedRecord {
            normalized_title: normalize_company_name(&source.title),
            source,
        }
    }
}
