#[path = "../test_utils/lib.rs"]
mod test_utils;

use test_utils::constants::EVALUATION_CASES_CSV_PATH;
use test_utils::{load_evaluation_cases, load_test_reference_index, run_evaluation_for_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_cases_load() {
        let cases =
            load_evaluation_cases(&EVALUATION_CASES_CSV_PATH).expect("Failed to load cases");

        assert_eq!(cases.len(), 13);
        assert_eq!(cases[0].input_name, "Target Corporation");
        assert_eq!(cases[11].expected_ticker, None);
        assert_eq!(cases[12].expected_name, None);
    }

    #[test]
    fn test_evaluation_accuracy() {
        let index = load_test_reference_index();

        let evaluation_result = run_evaluation_for_file(&EVALUATION_CASES_CSV_PATH, &index);

        assert_eq!(evaluation_result.total, 13);

        // Every ticker lands in the candidate set, including the "no ticker" cases
        assert_eq!(evaluation_result.correct_tickers, 13);

        // "Apple Hospitality" names Apple Inc. first and "Zebra Technologies" has no match
        assert_eq!(evaluation_result.correct_names, 11);

        let failed_inputs: Vec<&str> = evaluation_result
            .failures
            .iter()
            .map(|failure| failure.case.input_name.as_str())
            .collect();
        assert_eq!(failed_inputs, vec!["Apple Hospitality", "Zebra Technologies"]);
    }
}
