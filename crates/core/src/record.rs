//! Record shapes understood by the projection engine.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::schema::Schema;

/// A narrowed record: external field name to value.
///
/// Only keys that matched a field of the source record are present, so two
/// projected records of the same page may carry different keys.
pub type ProjectedRecord = Map<String, Value>;

/// Key lookup over a schemaless record.
pub trait DynamicFields {
    /// Value stored under exactly `name`, if any.
    fn field(&self, name: &str) -> Option<&Value>;
}

impl DynamicFields for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> DynamicFields for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl DynamicFields for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// How a record exposes its fields.
pub enum Shape<'a, R: 'static> {
    /// Statically declared fields, read through the type's registry.
    Fixed(&'static Schema<R>),
    /// String-keyed mapping without a schema.
    Dynamic(&'a dyn DynamicFields),
    /// Anything else. Nothing can be projected out of it.
    Opaque,
}

impl<R: 'static> Shape<'_, R> {
    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Fixed(_) => "fixed",
            Shape::Dynamic(_) => "dynamic",
            Shape::Opaque => "opaque",
        }
    }
}

impl<R: 'static> core::fmt::Debug for Shape<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Shape::Fixed(schema) => f.debug_tuple("Fixed").field(&schema.name()).finish(),
            Shape::Dynamic(_) => f.write_str("Dynamic"),
            Shape::Opaque => f.write_str("Opaque"),
        }
    }
}

/// An element of a paginated payload.
///
/// Fixed-schema types implement this through
/// [`fixed_schema!`](crate::fixed_schema); string-keyed maps of JSON values
/// and `serde_json::Value` are covered here.
pub trait Record: Sized + 'static {
    fn shape(&self) -> Shape<'_, Self>;
}

impl Record for Map<String, Value> {
    fn shape(&self) -> Shape<'_, Self> {
        Shape::Dynamic(self)
    }
}

impl<S: BuildHasher + 'static> Record for HashMap<String, Value, S> {
    fn shape(&self) -> Shape<'_, Self> {
        Shape::Dynamic(self)
    }
}

impl Record for BTreeMap<String, Value> {
    fn shape(&self) -> Shape<'_, Self> {
        Shape::Dynamic(self)
    }
}

impl Record for Value {
    fn shape(&self) -> Shape<'_, Self> {
        match self {
            Value::Object(map) => Shape::Dynamic(map),
            _ => Shape::Opaque,
        }
    }
}
