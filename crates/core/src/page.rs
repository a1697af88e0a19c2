//! Paginated result container.

use serde::{Deserialize, Serialize};

use crate::record::{ProjectedRecord, Record};

/// One page of homogeneous records plus its pagination metadata.
///
/// Serialized as `{"page": .., "rpp": .., "payload": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    page: u64,
    #[serde(rename = "rpp")]
    records_per_page: u64,
    #[serde(default = "Vec::new")]
    payload: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(page: u64, records_per_page: u64, payload: Vec<T>) -> Self {
        Self {
            page,
            records_per_page,
            payload,
        }
    }

    /// A single page holding the whole collection.
    pub fn single(payload: Vec<T>) -> Self {
        let records_per_page = payload.len() as u64;
        Self::new(1, records_per_page, payload)
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn records_per_page(&self) -> u64 {
        self.records_per_page
    }

    pub fn payload(&self) -> &[T] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn into_payload(self) -> Vec<T> {
        self.payload
    }

    /// Same pagination metadata, different payload.
    pub(crate) fn with_payload<U>(&self, payload: Vec<U>) -> Page<U> {
        Page::new(self.page, self.records_per_page, payload)
    }
}

impl<T: Record + Sync> Page<T> {
    /// Narrows every record to `fields`. See [`crate::engine::project`].
    pub fn project<S: AsRef<str>>(&self, fields: &[S]) -> Page<ProjectedRecord> {
        crate::engine::project(self, fields)
    }
}
