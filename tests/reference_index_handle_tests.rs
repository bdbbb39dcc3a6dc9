#[path = "../test_utils/lib.rs"]
mod test_utils;

use company_matcher::{
    match_company_name, CompanyRecord, CompanyRecordListPreprocessor, Error,
    ReferenceIndexHandle,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use test_utils::constants::COMPANY_TICKERS_CSV_PATH;
use test_utils::{load_test_company_records, load_test_reference_index};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concurrent_queries_share_one_index() {
        let index = Arc::new(load_test_reference_index());
        let queries = ["Target Corporation", "targt corp", "Alphabet", "Hathaway Berkshire"];

        let expected: Vec<_> = queries
            .iter()
            .map(|query| match_company_name(query, &index))
            .collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let index = Arc::clone(&index);
                thread::spawn(move || {
                    queries
                        .iter()
                        .map(|query| match_company_name(query, &index))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let results = handle.join().expect("worker thread panicked");
            assert_eq!(results, expected);
        }
    }

    #[test]
    fn test_queries_fail_until_index_is_loaded() {
        let handle = ReferenceIndexHandle::new();

        assert!(matches!(
            handle.match_company_name("Target Corporation"),
            Err(Error::IndexUnavailable)
        ));

        handle
            .load(load_test_company_records())
            .expect("load should succeed");

        let result = handle
            .match_company_name("Target Corporation")
            .expect("index should be loaded");
        assert_eq!(result.predicted_ticker.as_deref(), Some("TGT"));
    }

    #[test]
    fn test_refresh_is_visible_to_later_queries_only() {
        let handle = Arc::new(ReferenceIndexHandle::new());
        handle
            .load(vec![CompanyRecord::new("Target Corporation", Some("TGT"))])
            .expect("load should succeed");

        let in_flight_snapshot = handle.snapshot().expect("index should be loaded");

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                thread::spawn(move || {
                    for _ in 0..50 {
                        let result = handle
                            .match_company_name("Target Corporation")
                            .expect("index should be loaded");

                        // Either the old or the new index, both of which know Target
                        assert_eq!(result.predicted_ticker.as_deref(), Some("TGT"));
                    }
                })
            })
            .collect();

        handle
            .load(load_test_company_records())
            .expect("refresh should succeed");

        for reader in readers {
            reader.join().expect("reader thread panicked");
        }

        assert_eq!(in_flight_snapshot.len(), 1);
        assert!(match_company_name("Walmart", &in_flight_snapshot)
            .predicted_ticker
            .is_none());

        let result = handle
            .match_company_name("Walmart")
            .expect("index should be loaded");
        assert_eq!(result.predicted_ticker.as_deref(), Some("WMT"));
    }

    #[test]
    fn test_reference_loads_from_plain_and_gzip_files() {
        let plain_records =
            CompanyRecordListPreprocessor::read_company_record_list_from_path(
                &*COMPANY_TICKERS_CSV_PATH,
            )
            .expect("plain CSV should load");

        let csv = fs::read(&*COMPANY_TICKERS_CSV_PATH).expect("Failed to read test CSV");
        let mut gz_file = tempfile::Builder::new()
            .suffix(".csv.gz")
            .tempfile()
            .expect("Failed to create temporary file");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&csv).expect("Failed to compress test CSV");
        gz_file
            .write_all(&encoder.finish().expect("Failed to finish compression"))
            .expect("Failed to write temporary file");

        let gzip_records =
            CompanyRecordListPreprocessor::read_company_record_list_from_path(gz_file.path())
                .expect("gzip CSV should load");

        assert_eq!(plain_records.len(), 17);
        assert_eq!(plain_records, gzip_records);
    }
}
