/// Length of the longest common subsequence of two character sequences.
///
/// Classic dynamic-programming formulation, keeping a single row of the table.
pub fn longest_common_subsequence_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; b.len() + 1];

    for a_char in a {
        let mut diagonal = 0;
        for (b_idx, b_char) in b.iter().enumerate() {
            let above = row[b_idx + 1];
            row[b_idx + 1] = if a_char == b_char {
                diagonal + 1
            } else {
                above.max(row[b_idx])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}

/// Normalized indel similarity in `0.0..=1.0`.
///
/// This is `1 - indel_distance / (|a| + |b|)`, where the indel distance is the Levenshtein
/// distance with insertions and deletions only (a substitution costs 2). It simplifies to
/// `2 * LCS / (|a| + |b|)`. Returns `0.0` if either side is empty.
pub fn indel_similarity(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let lcs = longest_common_subsequence_length(a, b);

    (2 * lcs) as f64 / (a.len() + b.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_longest_common_subsequence_length() {
        assert_eq!(
            longest_common_subsequence_length(&chars("targt"), &chars("target")),
            5
        );
        assert_eq!(
            longest_common_subsequence_length(&chars("tarjet"), &chars("target")),
            5
        );
        assert_eq!(
            longest_common_subsequence_length(&chars("abc"), &chars("xyz")),
            0
        );
        assert_eq!(longest_common_subsequence_length(&chars(""), &chars("abc")), 0);
    }

    #[test]
    fn test_indel_similarity() {
        assert_eq!(indel_similarity(&chars("apple"), &chars("apple")), 1.0);
        assert_eq!(indel_similarity(&chars(""), &chars("apple")), 0.0);
        assert_eq!(indel_similarity(&chars(""), &chars("")), 0.0);
        assert!((indel_similarity(&chars("targt"), &chars("target")) - 10.0 / 11.0).abs() < 1e-9);
    }
}
