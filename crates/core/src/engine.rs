//! The projection engine: resolve, plan, fan out, join.

use std::panic;
use std::thread;

use tracing::{debug, trace};

use crate::aggregator;
use crate::page::Page;
use crate::planner::ChunkPlan;
use crate::record::{ProjectedRecord, Record, Shape};
use crate::resolver::{self, FieldDescriptor};
use crate::worker::{self, Extractor};

/// Narrows every record of `page` to the requested `fields`.
///
/// - An empty field list or an empty payload gives an empty payload.
/// - A payload whose first record is neither fixed-schema nor dynamic gives an
///   empty payload.
/// - Otherwise the output has exactly one record per input record, in input
///   order, even when none of the requested names resolved.
///
/// Pagination metadata is copied unchanged. Never fails.
pub fn project<R, S>(page: &Page<R>, fields: &[S]) -> Page<ProjectedRecord>
where
    R: Record + Sync,
    S: AsRef<str>,
{
    let Some(first) = page.payload().first() else {
        return page.with_payload(Vec::new());
    };
    if fields.is_empty() {
        return page.with_payload(Vec::new());
    }

    let shape = first.shape();
    let (descriptors, extractor) = match prepare(&shape, fields) {
        Some(prepared) => prepared,
        None => {
            debug!(shape = shape.kind(), "unsupported record shape; nothing projected");
            return page.with_payload(Vec::new());
        }
    };

    let plan = ChunkPlan::for_len(page.len());
    debug!(
        records = plan.records(),
        delta = plan.delta(),
        shape = shape.kind(),
        requested = fields.len(),
        resolved = descriptors.len(),
        "projecting page"
    );

    let chunks = fan_out(page.payload(), &plan, &extractor);
    page.with_payload(aggregator::concat(chunks))
}

fn prepare<R, S>(
    shape: &Shape<'_, R>,
    fields: &[S],
) -> Option<(Vec<FieldDescriptor>, Extractor<R>)>
where
    R: Record,
    S: AsRef<str>,
{
    match shape {
        Shape::Fixed(schema) => {
            let descriptors = resolver::resolve_fixed(schema, fields);
            let extractor = Extractor::fixed(schema, &descriptors);
            Some((descriptors, extractor))
        }
        Shape::Dynamic(_) => {
            let descriptors = resolver::resolve_dynamic(fields);
            let extractor = Extractor::dynamic(&descriptors);
            Some((descriptors, extractor))
        }
        Shape::Opaque => None,
    }
}

/// Runs one scoped worker per planned chunk and returns their outputs in
/// chunk order.
fn fan_out<R>(
    payload: &[R],
    plan: &ChunkPlan,
    extractor: &Extractor<R>,
) -> Vec<Vec<ProjectedRecord>>
where
    R: Record + Sync,
{
    thread::scope(|scope| {
        let handles: Vec<_> = plan
            .ranges()
            .iter()
            .enumerate()
            .map(|(index, range)| {
                let chunk = &payload[range.clone()];
                scope.spawn(move || {
                    let projected = worker::project_chunk(chunk, extractor);
                    trace!(chunk = index, records = projected.len(), "chunk projected");
                    projected
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|cause| panic::resume_unwind(cause)))
            .collect()
    })
}
