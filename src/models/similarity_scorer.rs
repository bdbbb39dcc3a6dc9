use crate::types::MatchScore;
use crate::utils::{indel_similarity, longest_common_subsequence_length};
use std::collections::BTreeSet;

/// Buckets for the character histograms used to bound `partial_ratio` windows.
const HISTOGRAM_BUCKETS: usize = 128;

type ScoreVariant = fn(&str, &str, MatchScore) -> MatchScore;

/// Token-based fuzzy comparison of two (already normalized) company names.
///
/// The final score is the maximum of four variants, each in `0..=100`:
///
/// - `ratio`: indel similarity of the two full strings.
/// - `partial_ratio`: best `ratio` of the shorter string against every equally long
///   window of the longer one.
/// - `token_sort_ratio`: `ratio` after sorting the whitespace-separated tokens.
/// - `token_set_ratio`: compares the sorted token intersection against the intersection
///   extended with each side's remaining tokens, keeping the best pairing.
///
/// Every variant treats an empty side as a score of 0. All four are symmetric, so
/// `score(a, b) == score(b, a)`.
///
/// The `*_with_cutoff` forms return the exact score whenever it reaches `score_cutoff`.
/// Below the cutoff they may return any lower value, which lets them skip comparisons
/// that cannot reach it.
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn score(a: &str, b: &str) -> MatchScore {
        Self::score_with_cutoff(a, b, 0)
    }

    /// Like `score`, but reports 0 for pairs scoring below `score_cutoff`.
    pub fn score_with_cutoff(a: &str, b: &str, score_cutoff: MatchScore) -> MatchScore {
        let variants: [ScoreVariant; 4] = [
            Self::ratio_with_cutoff,
            Self::token_set_ratio_with_cutoff,
            Self::token_sort_ratio_with_cutoff,
            Self::partial_ratio_with_cutoff,
        ];

        let mut best = 0;
        for variant in variants {
            best = best.max(variant(a, b, score_cutoff.max(best)));
            if best == 100 {
                break;
            }
        }

        if best >= score_cutoff {
            best
        } else {
            0
        }
    }

    pub fn ratio(a: &str, b: &str) -> MatchScore {
        Self::ratio_with_cutoff(a, b, 0)
    }

    pub fn ratio_with_cutoff(a: &str, b: &str, score_cutoff: MatchScore) -> MatchScore {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();

        Self::chars_ratio_with_cutoff(&a_chars, &b_chars, score_cutoff)
    }

    pub fn partial_ratio(a: &str, b: &str) -> MatchScore {
        Self::partial_ratio_with_cutoff(a, b, 0)
    }

    /// Slides a window the length of the shorter string over the longer one. A bucketed
    /// character histogram bounds each window's LCS from above, so only windows which could
    /// beat both the cutoff and the best score so far are aligned in full.
    pub fn partial_ratio_with_cutoff(a: &str, b: &str, score_cutoff: MatchScore) -> MatchScore {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();

        if a_chars.is_empty() || b_chars.is_empty() {
            return 0;
        }

        let (shorter, longer) = if a_chars.len() <= b_chars.len() {
            (&a_chars, &b_chars)
        } else {
            (&b_chars, &a_chars)
        };

        let window_len = shorter.len();

        let mut shorter_histogram = [0usize; HISTOGRAM_BUCKETS];
        for &c in shorter.iter() {
            shorter_histogram[Self::bucket(c)] += 1;
        }

        let mut window_histogram = [0usize; HISTOGRAM_BUCKETS];
        let mut overlap = 0;
        let mut best = 0;

        for (idx, &entering) in longer.iter().enumerate() {
            let bucket = Self::bucket(entering);
            if window_histogram[bucket] < shorter_histogram[bucket] {
                overlap += 1;
            }
            window_histogram[bucket] += 1;

            if idx >= window_len {
                let bucket = Self::bucket(longer[idx - window_len]);
                window_histogram[bucket] -= 1;
                if window_histogram[bucket] < shorter_histogram[bucket] {
                    overlap -= 1;
                }
            }

            if idx + 1 < window_len {
                continue;
            }

            // LCS(shorter, window) <= overlap, so ratio <= overlap / window_len
            let upper_bound = Self::fraction_to_score(overlap as f64 / window_len as f64);
            if upper_bound <= best || upper_bound < score_cutoff {
                continue;
            }

            let window = &longer[idx + 1 - window_len..=idx];
            best = best.max(Self::chars_ratio(shorter, window));
            if best == 100 {
                break;
            }
        }

        best
    }

    pub fn token_sort_ratio(a: &str, b: &str) -> MatchScore {
        Self::token_sort_ratio_with_cutoff(a, b, 0)
    }

    pub fn token_sort_ratio_with_cutoff(a: &str, b: &str, score_cutoff: MatchScore) -> MatchScore {
        Self::ratio_with_cutoff(&Self::sorted_tokens(a), &Self::sorted_tokens(b), score_cutoff)
    }

    pub fn token_set_ratio(a: &str, b: &str) -> MatchScore {
        Self::token_set_ratio_with_cutoff(a, b, 0)
    }

    pub fn token_set_ratio_with_cutoff(a: &str, b: &str, score_cutoff: MatchScore) -> MatchScore {
        let a_tokens: BTreeSet<&str> = a.split_whitespace().collect();
        let b_tokens: BTreeSet<&str> = b.split_whitespace().collect();

        let intersection = Self::join_tokens(a_tokens.intersection(&b_tokens));
        let a_remainder = Self::join_tokens(a_tokens.difference(&b_tokens));
        let b_remainder = Self::join_tokens(b_tokens.difference(&a_tokens));

        let a_combined = format!("{} {}", intersection, a_remainder).trim().to_string();
        let b_combined = format!("{} {}", intersection, b_remainder).trim().to_string();

        Self::ratio_with_cutoff(&intersection, &a_combined, score_cutoff)
            .max(Self::ratio_with_cutoff(&intersection, &b_combined, score_cutoff))
            .max(Self::ratio_with_cutoff(&a_combined, &b_combined, score_cutoff))
    }

    fn chars_ratio(a: &[char], b: &[char]) -> MatchScore {
        Self::fraction_to_score(indel_similarity(a, b))
    }

    fn chars_ratio_with_cutoff(a: &[char], b: &[char], score_cutoff: MatchScore) -> MatchScore {
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        // LCS <= min(|a|, |b|)
        let upper_bound =
            Self::fraction_to_score((2 * a.len().min(b.len())) as f64 / (a.len() + b.len()) as f64);
        if upper_bound < score_cutoff {
            return 0;
        }

        let lcs = longest_common_subsequence_length(a, b);

        Self::fraction_to_score((2 * lcs) as f64 / (a.len() + b.len()) as f64)
    }

    fn fraction_to_score(fraction: f64) -> MatchScore {
        // Rounded half-to-even, then clamped as a guard against float noise
        let score = (100.0 * fraction).round_ties_even();

        score.clamp(0.0, 100.0) as MatchScore
    }

    fn bucket(c: char) -> usize {
        // Distinct characters sharing a bucket only loosen the bound
        c as usize % HISTOGRAM_BUCKETS
    }

    fn sorted_tokens(text: &str) -> String {
        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        tokens.sort_unstable();

        tokens.join(" ")
    }

    fn join_tokens<'a, 'b>(tokens: impl Iterator<Item = &'b &'a str>) -> String
    where
        'a: 'b,
    {
        tokens.copied().collect::<Vec<&str>>().join(" ")
    }
}
