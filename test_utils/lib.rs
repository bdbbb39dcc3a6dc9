#![allow(dead_code)] // Each integration test pulls in only what it needs

use company_matcher::{
    load_reference, match_company_name, CompanyRecordList, CompanyRecordListPreprocessor,
    ReferenceIndex,
};
use csv::ReaderBuilder;
use std::error::Error;
use std::path::Path;

pub mod constants;
pub mod models;
use constants::COMPANY_TICKERS_CSV_PATH;
pub use models::{EvaluationCase, EvaluationResult};

/// Loads the shared reference records used across integration tests.
pub fn load_test_company_records() -> CompanyRecordList {
    CompanyRecordListPreprocessor::read_company_record_list_from_path(&*COMPANY_TICKERS_CSV_PATH)
        .expect("Failed to load test company tickers")
}

pub fn load_test_reference_index() -> ReferenceIndex {
    load_reference(load_test_company_records())
}

/// Reads `input_name, expected_name, expected_ticker` rows. Blank cells are `None`.
pub fn load_evaluation_cases(file_path: &Path) -> Result<Vec<EvaluationCase>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(file_path)?;
    let mut cases = Vec::new();

    for record in reader.records() {
        let record = record?;

        let field = |idx: usize| {
            record
                .get(idx)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
        };

        match field(0) {
            Some(input_name) => cases.push(EvaluationCase {
                input_name,
                expected_name: field(1),
                expected_ticker: field(2),
            }),
            None => eprintln!("Skipping row without input name: {:?}", record),
        }
    }

    Ok(cases)
}

/// Runs every case in `cases_file_path` against `reference_index` and reports accuracy.
pub fn run_evaluation_for_file(
    cases_file_path: &Path,
    reference_index: &ReferenceIndex,
) -> EvaluationResult {
    let cases = load_evaluation_cases(cases_file_path).expect("Failed to load evaluation cases");

    let mut evaluation_result = EvaluationResult::default();

    for case in &cases {
        let result = match_company_name(&case.input_name, reference_index);
        evaluation_result.record(case, &result);
    }

    for failure in &evaluation_result.failures {
        eprintln!("FAILED: Input: {}", failure.case.input_name);
        eprintln!(
            "  Expected Name: {:?}, Got: {:?}",
            failure.case.expected_name, failure.matched_name
        );
        eprintln!(
            "  Expected Ticker: {:?}, Got: {:?}, All Possible: {:?}",
            failure.case.expected_ticker, failure.predicted_ticker, failure.all_tickers
        );
    }

    eprintln!("Total test cases: {}", evaluation_result.total);
    eprintln!(
        "Correct company name matches: {} ({:.2}%)",
        evaluation_result.correct_names,
        evaluation_result.name_accuracy() * 100.0
    );
    eprintln!(
        "Correct ticker matches: {} ({:.2}%)",
        evaluation_result.correct_tickers,
        evaluation_result.ticker_accuracy() * 100.0
    );

    evaluation_result
}
