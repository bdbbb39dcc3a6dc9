use crate::constants::COMPANY_NAME_SUFFIXES;
use crate::types::NormalizedCompanyName;

/// Canonicalizes a raw company name into the key used for comparison.
///
/// Steps:
/// - Lower-cases the input.
/// - Drops every character outside `[a-z0-9 ]` (punctuation, tabs and non-ASCII letters
///   are removed, not replaced by spaces).
/// - Collapses runs of spaces and trims both ends.
/// - Strips trailing legal / entity suffixes (see `COMPANY_NAME_SUFFIXES`). Each pass
///   removes the first suffix, in list order, that matches the current end of the name;
///   passes repeat until no suffix matches.
///
/// The result is a fixed point: `normalize_company_name(normalize_company_name(x))`
/// always equals `normalize_company_name(x)`.
///
/// ### Example:
/// ```rust
/// use company_matcher::normalize_company_name;
///
/// assert_eq!(normalize_company_name("Target Corporation"), "target");
/// assert_eq!(normalize_company_name("Amazon.com, Inc."), "amazoncom");
/// assert_eq!(normalize_company_name("!@#$%^"), "");
/// ```
pub fn normalize_company_name(raw: &str) -> NormalizedCompanyName {
    let filtered: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    let mut name = filtered
        .split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    while let Some(suffix) = COMPANY_NAME_SUFFIXES
        .iter()
        .find(|suffix| name.ends_with(*suffix))
    {
        name.truncate(name.len() - suffix.len());
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_legal_suffix() {
        assert_eq!(normalize_company_name("Target Corporation"), "target");
        assert_eq!(normalize_company_name("targt corp"), "targt");
        assert_eq!(normalize_company_name("Apple Inc."), "apple");
        assert_eq!(normalize_company_name("NVIDIA CORP"), "nvidia");
        assert_eq!(normalize_company_name("Home Depot Incorporated"), "home depot");
    }

    #[test]
    fn test_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize_company_name("Amazon.com, Inc."), "amazoncom");
        assert_eq!(normalize_company_name("Procter & Gamble Co."), "procter gamble");
        assert_eq!(
            normalize_company_name("  The   Coca-Cola   Company "),
            "the cocacola"
        );
    }

    #[test]
    fn test_only_ascii_letters_digits_and_spaces_survive() {
        assert_eq!(normalize_company_name("!@#$%^"), "");
        assert_eq!(normalize_company_name("Foo\tBar"), "foobar");
        assert_eq!(normalize_company_name("Société Générale"), "socit gnrale");
        assert_eq!(normalize_company_name("3M Company"), "3m");
    }

    #[test]
    fn test_strips_stacked_suffixes() {
        assert_eq!(normalize_company_name("Foo Holdings Inc"), "foo");
        assert_eq!(normalize_company_name("Bar Group Ltd."), "bar");
        assert_eq!(normalize_company_name("Baz - Common Stock"), "baz");
        assert_eq!(normalize_company_name("Banco Santander, S.A."), "banco santander");
    }

    #[test]
    fn test_suffix_requires_word_boundary() {
        // A lone suffix word is a name in its own right
        assert_eq!(normalize_company_name("Inc"), "inc");
        assert_eq!(normalize_company_name("Costco"), "costco");
        assert_eq!(normalize_company_name("Disco Corp"), "disco");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            "Target Corporation",
            "Foo Holdings Inc",
            "  Acme   Widgets  Co  ",
            "The Bank of",
            "Berkshire Hathaway Inc. (Class B)",
            "x and the of inc",
            "!@#$%^",
            "",
            "Inc",
            "Banco Santander S p A",
            "Société Générale S.A.",
            "Foo\tInc",
        ];

        for sample in samples {
            let once = normalize_company_name(sample);
            let twice = normalize_company_name(&once);
            assert_eq!(once, twice, "normalization of {:?} is not idempotent", sample);
        }
    }
}
