use crate::models::Candidate;

/// Sorts candidates by score in descending order.
///
/// The sort is stable: candidates with equal scores keep the order in which they were
/// produced, which is the order of the reference records. This is what makes the fuzzy
/// tier deterministic when several titles tie.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyRecord;

    fn candidate(title: &str, score: u8) -> Candidate {
        Candidate::from_record(&CompanyRecord::new(title, None), score)
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut candidates = vec![
            candidate("first", 91),
            candidate("second", 100),
            candidate("third", 91),
            candidate("fourth", 100),
        ];

        sort_candidates(&mut candidates);

        let titles: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "fourth", "first", "third"]);
    }
}
