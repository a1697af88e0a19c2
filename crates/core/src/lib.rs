//! `partial-core` — field projection over paginated records.
//!
//! Given a [`Page`] of records and a list of requested field names, the engine
//! resolves the names against the records' [`Shape`], splits the payload into
//! up to four contiguous chunks, narrows each chunk on its own scoped thread and
//! joins the results back in order.
//!
//! This crate is pure: no IO, no global state, no errors. Anomalous requests
//! degrade to narrower (or empty) pages.

pub mod aggregator;
pub mod engine;
pub mod page;
pub mod planner;
pub mod record;
pub mod resolver;
pub mod schema;
pub mod worker;

pub use engine::project;
pub use page::Page;
pub use planner::ChunkPlan;
pub use record::{DynamicFields, ProjectedRecord, Record, Shape};
pub use resolver::FieldDescriptor;
pub use schema::{FieldSpec, Schema};
