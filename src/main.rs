use company_matcher::{load_reference, match_company_name, CompanyRecordListPreprocessor};
use log::{error, info};
use std::env;
use std::io::{self, BufRead};
use std::time::Instant;

fn main() {
    // Initialize the logger
    env_logger::init();

    let reference_path = match env::args().nth(1) {
        Some(reference_path) => reference_path,
        None => {
            eprintln!("Usage: company-matcher-cli <reference.csv | reference.csv.gz>");
            std::process::exit(2);
        }
    };

    let company_record_list =
        match CompanyRecordListPreprocessor::read_company_record_list_from_path(&reference_path) {
            Ok(company_record_list) => company_record_list,
            Err(e) => {
                error!("Failed to load reference data from {}: {}", reference_path, e);
                std::process::exit(1);
            }
        };

    let reference_index = load_reference(company_record_list);

    // One query per line of stdin
    for line in io::stdin().lock().lines() {
        let query = match line {
            Ok(query) => query,
            Err(e) => {
                error!("Failed to read from stdin: {}", e);
                std::process::exit(1);
            }
        };

        if query.trim().is_empty() {
            continue;
        }

        let start = Instant::now();
        let result = match_company_name(&query, &reference_index);
        let elapsed = start.elapsed();

        info!(
            "{:?} resolved via {:?} in {:.4} seconds",
            query,
            result.match_tier,
            elapsed.as_secs_f64()
        );

        println!("Input: {}", query);
        println!("{}", result);
        println!();
    }
}
