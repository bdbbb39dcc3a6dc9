use crate::types::TickerSymbol;
use std::collections::HashSet;

/// Collects ticker symbols, dropping missing / blank entries and duplicates while
/// maintaining first-seen order.
///
/// # Arguments
/// * `ticker_symbols` - Optional ticker symbols, in candidate order.
///
/// # Returns
/// A new vector containing each non-empty ticker symbol exactly once.
pub fn dedup_ticker_symbols<'a, I>(ticker_symbols: I) -> Vec<TickerSymbol>
where
    I: IntoIterator<Item = Option<&'a TickerSymbol>>,
{
    let mut seen = HashSet::new();

    ticker_symbols
        .into_iter()
        .flatten()
        .filter(|ticker_symbol| !ticker_symbol.trim().is_empty())
        .filter_map(|ticker_symbol| {
            if seen.insert(ticker_symbol) {
                Some(ticker_symbol.clone())
            } else {
                None
            }
        })
        .collect()
}
