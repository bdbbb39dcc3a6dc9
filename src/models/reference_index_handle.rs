use crate::models::{CompanyMatcher, MatchResult, ReferenceIndex};
use crate::types::CompanyRecordList;
use crate::Error;
use log::info;
use std::sync::{Arc, RwLock};

/// Process-wide handle to the active `ReferenceIndex`.
///
/// A refresh builds a brand-new index before taking the write lock and then swaps the
/// `Arc` in a single assignment. Queries clone the `Arc` under a read lock and match
/// against that snapshot, so an in-flight query sees either the old index or the new one,
/// never a partially built one.
#[derive(Debug, Default)]
pub struct ReferenceIndexHandle {
    current: RwLock<Option<Arc<ReferenceIndex>>>,
}

impl ReferenceIndexHandle {
    /// Creates a handle with no index loaded. Queries fail until `load` is called.
    pub fn new() -> Self {
        ReferenceIndexHandle {
            current: RwLock::new(None),
        }
    }

    pub fn from_index(reference_index: ReferenceIndex) -> Self {
        ReferenceIndexHandle {
            current: RwLock::new(Some(Arc::new(reference_index))),
        }
    }

    /// Builds an index from `company_record_list` and makes it the active one.
    pub fn load(&self, company_record_list: CompanyRecordList) -> Result<(), Error> {
        let reference_index = Arc::new(ReferenceIndex::build(company_record_list));
        let record_count = reference_index.len();

        self.swap(reference_index)?;

        info!("Activated reference index with {} records", record_count);

        Ok(())
    }

    /// Returns the active index.
    pub fn snapshot(&self) -> Result<Arc<ReferenceIndex>, Error> {
        let current = self
            .current
            .read()
            .map_err(|err| Error::Other(format!("Reference index lock poisoned: {}", err)))?;

        current.clone().ok_or(Error::IndexUnavailable)
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_ok()
    }

    /// Matches `query` against the active index.
    ///
    /// Only fails if no index has been loaded; every other outcome is a `MatchResult`.
    pub fn match_company_name(&self, query: &str) -> Result<MatchResult, Error> {
        let reference_index = self.snapshot()?;

        Ok(CompanyMatcher::new(&reference_index).match_company_name(query))
    }

    fn swap(&self, reference_index: Arc<ReferenceIndex>) -> Result<(), Error> {
        let mut current = self
            .current
            .write()
            .map_err(|err| Error::Other(format!("Reference index lock poisoned: {}", err)))?;

        *current = Some(reference_index);

        Ok(())
    }
}
