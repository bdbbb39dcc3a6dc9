use crate::models::{CompanyRecord, NormalizedRecord};
use crate::types::{CompanyName, CompanyRecordList, NormalizedCompanyName, RecordIndex};
use log::info;
use std::collections::HashMap;

/// An immutable, preprocessed view of the reference company records.
///
/// Every title is normalized exactly once, at build time. Titles are not guaranteed to be
/// unique, so both lookup maps point at every matching record, in reference order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    records: Vec<NormalizedRecord>,
    exact_title_map: HashMap<CompanyName, Vec<RecordIndex>>,
    normalized_title_map: HashMap<NormalizedCompanyName, Vec<RecordIndex>>,
}

impl ReferenceIndex {
    pub fn build(company_record_list: CompanyRecordList) -> Self {
        let mut instance = ReferenceIndex {
            records: Vec::with_capacity(company_record_list.len()),
            exact_title_map: HashMap::with_capacity(company_record_list.len()),
            normalized_title_map: HashMap::with_capacity(company_record_list.len()),
        };

        instance.ingest_company_records(company_record_list);

        info!("Built reference index with {} records", instance.len());

        instance
    }

    fn ingest_company_records(&mut self, company_record_list: CompanyRecordList) {
        for (record_idx, company_record) in company_record_list.into_iter().enumerate() {
            let normalized_record = NormalizedRecord::new(company_record);

            self.exact_title_map
                .entry(normalized_record.source.title.clone())
                .or_insert_with(Vec::new)
                .push(record_idx);

            // Titles which normalize to nothing can never be matched on their key
            if !normalized_record.normalized_title.is_empty() {
                self.normalized_title_map
                    .entry(normalized_record.normalized_title.clone())
                    .or_insert_with(Vec::new)
                    .push(record_idx);
            }

            self.records.push(normalized_record);
        }
    }

    /// Records whose raw title equals `raw_title` (case-sensitive), in reference order.
    pub fn exact_lookup(&self, raw_title: &str) -> Vec<&CompanyRecord> {
        self.lookup(self.exact_title_map.get(raw_title))
    }

    /// Records whose normalized title equals `normalized_title`, in reference order.
    pub fn normalized_lookup(&self, normalized_title: &str) -> Vec<&CompanyRecord> {
        self.lookup(self.normalized_title_map.get(normalized_title))
    }

    /// Every `(normalized title, record)` pair, in reference order.
    pub fn all_normalized_titles(
        &self,
    ) -> impl Iterator<Item = (&NormalizedCompanyName, &CompanyRecord)> {
        self.records
            .iter()
            .map(|record| (&record.normalized_title, &record.source))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn lookup(&self, record_indices: Option<&Vec<RecordIndex>>) -> Vec<&CompanyRecord> {
        record_indices
            .map(|record_indices| {
                record_indices
                    .iter()
                    .filter_map(|record_idx| self.records.get(*record_idx))
                    .map(|record| &record.source)
                    .collect()
            })
            .unwrap_or_default()
    }
}
