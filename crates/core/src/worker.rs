//! Per-chunk field extraction.

use serde_json::Value;

use crate::record::{ProjectedRecord, Record, Shape};
use crate::resolver::FieldDescriptor;
use crate::schema::Schema;

/// Resolved descriptors bound to the way the payload's records are read.
///
/// Holds no per-record state, so one extractor is shared by every worker of a
/// call.
pub enum Extractor<R> {
    /// `(external name, reader)` pairs looked up once by internal identifier.
    Fixed(Vec<(String, fn(&R) -> Value)>),
    /// External names, looked up as keys on each record.
    Dynamic(Vec<String>),
}

impl<R: Record> Extractor<R> {
    pub fn fixed(schema: &Schema<R>, descriptors: &[FieldDescriptor]) -> Self {
        let readers = descriptors
            .iter()
            .filter_map(|d| {
                schema
                    .by_internal(d.internal())
                    .map(|spec| (d.external().to_owned(), spec.read))
            })
            .collect();
        Self::Fixed(readers)
    }

    pub fn dynamic(descriptors: &[FieldDescriptor]) -> Self {
        Self::Dynamic(descriptors.iter().map(|d| d.external().to_owned()).collect())
    }

    /// Narrows one record. Fields the record does not have are left out.
    pub fn extract(&self, record: &R) -> ProjectedRecord {
        let mut projected = ProjectedRecord::new();

        match (self, record.shape()) {
            (Extractor::Fixed(readers), Shape::Fixed(_)) => {
                for (external, read) in readers {
                    projected.insert(external.clone(), read(record));
                }
            }
            (Extractor::Dynamic(names), Shape::Dynamic(fields)) => {
                for name in names {
                    if let Some(value) = fields.field(name) {
                        projected.insert(name.clone(), value.clone());
                    }
                }
            }
            // Record shaped differently from the first one in the payload.
            _ => {}
        }

        projected
    }
}

impl<R> core::fmt::Debug for Extractor<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Extractor::Fixed(readers) => f
                .debug_tuple("Fixed")
                .field(&readers.iter().map(|(name, _)| name).collect::<Vec<_>>())
                .finish(),
            Extractor::Dynamic(names) => f.debug_tuple("Dynamic").field(names).finish(),
        }
    }
}

/// Projects one contiguous chunk, one output record per input record, in
/// input order.
pub fn project_chunk<R: Record>(chunk: &[R], extractor: &Extractor<R>) -> Vec<ProjectedRecord> {
    chunk.iter().map(|record| extractor.extract(record)).collect()
}
