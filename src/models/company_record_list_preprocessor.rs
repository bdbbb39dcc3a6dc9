use crate::models::CompanyRecord;
use crate::types::CompanyRecordList;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs;
use std::io::Cursor;
use std::io::Read;
use std::path::Path;

const TITLE_COLUMN: &str = "title";
const TICKER_COLUMN: &str = "ticker";
const STATE_COLUMN: &str = "state";
const COUNTRY_COLUMN: &str = "country";

pub struct CompanyRecordListPreprocessor {}

impl CompanyRecordListPreprocessor {
    /// Parses a CSV document with at least a `title` column and, optionally, `ticker`,
    /// `state` and `country` columns. Header names are matched case-insensitively, other
    /// columns are ignored and row order is preserved.
    pub fn read_company_record_list_from_string(csv: &str) -> Result<CompanyRecordList, Error> {
        let mut company_record_list = CompanyRecordList::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let title_idx = headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(TITLE_COLUMN))
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", TITLE_COLUMN)))?;

        let column_idx = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
        };

        let ticker_idx = column_idx(TICKER_COLUMN);
        let state_idx = column_idx(STATE_COLUMN);
        let country_idx = column_idx(COUNTRY_COLUMN);

        if ticker_idx.is_none() {
            debug!("No '{}' column; records will carry no tickers", TICKER_COLUMN);
        }

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let title = record.get(title_idx).ok_or_else(|| {
                Error::ParserError(format!(
                    "Missing '{}' field on line {}",
                    TITLE_COLUMN,
                    record.position().map_or(0, |position| position.line())
                ))
            })?;

            let ticker = ticker_idx
                .and_then(|ticker_idx| record.get(ticker_idx))
                .map(|ticker| ticker.trim().to_uppercase());

            let state = state_idx.and_then(|state_idx| record.get(state_idx));
            let country = country_idx.and_then(|country_idx| record.get(country_idx));

            company_record_list.push(
                CompanyRecord::new(title, ticker.as_deref()).with_location(state, country),
            );
        }

        Ok(company_record_list)
    }

    /// Decompresses and parses a Gzip-compressed company record CSV.
    pub fn extract_company_record_list_from_bytes(
        read_bytes: &[u8],
    ) -> Result<CompanyRecordList, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_company_record_list_from_string(&decompressed_data)
    }

    /// Reads a company record CSV from disk. Files ending in `.gz` are decompressed first.
    pub fn read_company_record_list_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<CompanyRecordList, Error> {
        let path = path.as_ref();

        let is_compressed = path
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("gz"));

        let company_record_list = if is_compressed {
            Self::extract_company_record_list_from_bytes(&fs::read(path)?)?
        } else {
            Self::read_company_record_list_from_string(&fs::read_to_string(path)?)?
        };

        info!(
            "Loaded {} company records from {}",
            company_record_list.len(),
            path.display()
        );

        Ok(company_record_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const SAMPLE_CSV: &str = "ticker,title\n\
                              tgt,Target Corporation\n\
                              ,Acme Private Holdings\n\
                              GOOGL,\"Alphabet Inc.\"\n";

    #[test]
    fn test_reads_title_and_ticker_columns() {
        let records = CompanyRecordListPreprocessor::read_company_record_list_from_string(SAMPLE_CSV)
            .expect("sample CSV should parse");

        assert_eq!(
            records,
            vec![
                CompanyRecord::new("Target Corporation", Some("TGT")),
                CompanyRecord::new("Acme Private Holdings", None),
                CompanyRecord::new("Alphabet Inc.", Some("GOOGL")),
            ]
        );
    }

    #[test]
    fn test_ticker_column_is_optional() {
        let records = CompanyRecordListPreprocessor::read_company_record_list_from_string(
            "title,cik\nTarget Corporation,27419\n",
        )
        .expect("CSV without tickers should parse");

        assert_eq!(records, vec![CompanyRecord::new("Target Corporation", None)]);
    }

    #[test]
    fn test_reads_state_and_country_columns() {
        let records = CompanyRecordListPreprocessor::read_company_record_list_from_string(
            "Title,Ticker,State,Country\n\
             Target Corporation,TGT,MN,United States\n\
             Acme Widgets,ACW,nan,None\n\
             Globex,GLX\n",
        )
        .expect("CSV with locations should parse");

        assert_eq!(
            records,
            vec![
                CompanyRecord::new("Target Corporation", Some("TGT"))
                    .with_location(Some("MN"), Some("United States")),
                CompanyRecord::new("Acme Widgets", Some("ACW")),
                CompanyRecord::new("Globex", Some("GLX")),
            ]
        );
    }

    #[test]
    fn test_missing_title_column_is_a_parser_error() {
        let result =
            CompanyRecordListPreprocessor::read_company_record_list_from_string("ticker\nTGT\n");

        assert!(matches!(result, Err(Error::ParserError(_))));
    }

    #[test]
    fn test_extracts_gzip_bytes() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(SAMPLE_CSV.as_bytes())
            .expect("failed to compress sample CSV");
        let compressed = encoder.finish().expect("failed to finish compression");

        let records =
            CompanyRecordListPreprocessor::extract_company_record_list_from_bytes(&compressed)
                .expect("compressed CSV should parse");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].ticker.as_deref(), Some("TGT"));
    }

    #[test]
    fn test_invalid_gzip_is_an_io_error() {
        let result =
            CompanyRecordListPreprocessor::extract_company_record_list_from_bytes(b"not gzip");

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
