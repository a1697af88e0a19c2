//! Field resolution: raw requested names to deduplicated descriptors.

use std::collections::HashSet;

use crate::record::{Record, Shape};
use crate::schema::Schema;

/// Characters stripped from both ends of a requested field name.
const PADDING: &[char] = &['\n', '\u{7}', '\u{8}', '\u{c}', '\r', '\t', '\u{b}', ' '];

/// A resolved field: the name callers asked for and the name to read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    external: String,
    internal: String,
}

impl FieldDescriptor {
    pub fn new(external: impl Into<String>, internal: impl Into<String>) -> Self {
        Self {
            external: external.into(),
            internal: internal.into(),
        }
    }

    /// Descriptor for a schemaless record, where both names coincide.
    pub fn dynamic(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            internal: name.clone(),
            external: name,
        }
    }

    pub fn external(&self) -> &str {
        &self.external
    }

    pub fn internal(&self) -> &str {
        &self.internal
    }
}

/// Strips padding from a requested name; `None` if nothing is left.
pub fn normalize(raw: &str) -> Option<&str> {
    let name = raw.trim_matches(PADDING);
    (!name.is_empty()).then_some(name)
}

/// Resolves requested names against the shape of a payload's records.
///
/// Unknown names are dropped. Opaque shapes resolve to nothing.
pub fn resolve<R, S>(shape: &Shape<'_, R>, fields: &[S]) -> Vec<FieldDescriptor>
where
    R: Record,
    S: AsRef<str>,
{
    match shape {
        Shape::Fixed(schema) => resolve_fixed(schema, fields),
        Shape::Dynamic(_) => resolve_dynamic(fields),
        Shape::Opaque => Vec::new(),
    }
}

/// Resolves against a static schema; the first declared alias match wins.
pub fn resolve_fixed<R, S>(schema: &Schema<R>, fields: &[S]) -> Vec<FieldDescriptor>
where
    R: 'static,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();

    for name in fields.iter().filter_map(|f| normalize(f.as_ref())) {
        if !seen.insert(name) {
            continue;
        }
        if let Some(spec) = schema.by_external(name) {
            descriptors.push(FieldDescriptor::new(spec.external, spec.internal));
        }
    }

    descriptors
}

/// Every distinct normalized name becomes a descriptor; there is no schema to
/// check against.
pub fn resolve_dynamic<S>(fields: &[S]) -> Vec<FieldDescriptor>
where
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    fields
        .iter()
        .filter_map(|f| normalize(f.as_ref()))
        .filter(|name| seen.insert(*name))
        .map(FieldDescriptor::dynamic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Debug)]
    struct Person {
        id: u32,
        given_name: String,
    }

    crate::fixed_schema!(Person {
        "id" => id,
        "first_name" => given_name,
    });

    fn person() -> Person {
        Person {
            id: 1,
            given_name: "Grace".to_string(),
        }
    }

    #[test]
    fn normalize_trims_control_padding() {
        assert_eq!(normalize("\u{7}\u{8}\ncompany\n"), Some("company"));
        assert_eq!(normalize("\t\nfirst_name\t"), Some("first_name"));
        assert_eq!(normalize(" \u{b}\u{c}\r "), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("first name"), Some("first name"));
    }

    #[test]
    fn fixed_resolution_drops_unknown_and_duplicates() {
        let record = person();
        let fields = ["first_name", "first_name ", "unknown", ""];

        let descriptors = resolve(&record.shape(), &fields);

        assert_eq!(
            descriptors,
            vec![FieldDescriptor::new("first_name", "given_name")]
        );
    }

    #[test]
    fn fixed_resolution_keeps_first_seen_order() {
        let record = person();
        let descriptors = resolve(&record.shape(), &["first_name", "\tid\n", "id"]);

        let externals: Vec<_> = descriptors.iter().map(|d| d.external()).collect();
        assert_eq!(externals, ["first_name", "id"]);
        assert_eq!(descriptors[1].internal(), "id");
    }

    #[test]
    fn fixed_resolution_is_case_sensitive() {
        let record = person();
        assert!(resolve(&record.shape(), &["ID", "First_Name"]).is_empty());
    }

    #[test]
    fn dynamic_resolution_accepts_any_name_once() {
        let record = json!({});
        let descriptors = resolve(&record.shape(), &["name", " name ", "name\n", "age", "\r"]);

        assert_eq!(
            descriptors,
            vec![FieldDescriptor::dynamic("name"), FieldDescriptor::dynamic("age")]
        );
        assert!(descriptors.iter().all(|d| d.external() == d.internal()));
    }

    #[test]
    fn opaque_resolution_is_empty() {
        let record = Value::from(42);
        assert!(resolve(&record.shape(), &["x"]).is_empty());
    }
}
