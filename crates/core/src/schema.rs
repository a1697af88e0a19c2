//! Static accessor registries for fixed-schema records.
//!
//! A fixed-schema record type declares its fields once, in order, through the
//! [`fixed_schema!`](crate::fixed_schema) macro. Each declared field pairs the
//! public alias used by callers with the Rust field name and a plain function
//! pointer that reads the value. Nothing is inspected at run time.

use core::fmt;

use serde::Serialize;
use serde_json::Value;

/// One declared field of a fixed-schema record.
pub struct FieldSpec<R> {
    /// Public alias, used in projection requests and as the output key.
    pub external: &'static str,
    /// Schema-level identifier (the Rust field name).
    pub internal: &'static str,
    /// Reads the field's value out of a record.
    pub read: fn(&R) -> Value,
}

impl<R> Clone for FieldSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldSpec<R> {}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("external", &self.external)
            .field("internal", &self.internal)
            .finish_non_exhaustive()
    }
}

/// Ordered field registry of a fixed-schema record type.
pub struct Schema<R: 'static> {
    name: &'static str,
    fields: &'static [FieldSpec<R>],
}

impl<R: 'static> Schema<R> {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec<R>]) -> Self {
        Self { name, fields }
    }

    /// Type name the schema was declared for (diagnostics only).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared fields, in declaration order.
    pub fn fields(&self) -> &'static [FieldSpec<R>] {
        self.fields
    }

    /// First declared field whose external alias equals `external`.
    pub fn by_external(&self, external: &str) -> Option<&'static FieldSpec<R>> {
        self.fields.iter().find(|spec| spec.external == external)
    }

    /// First declared field whose internal identifier equals `internal`.
    pub fn by_internal(&self, internal: &str) -> Option<&'static FieldSpec<R>> {
        self.fields.iter().find(|spec| spec.internal == internal)
    }
}

impl<R: 'static> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Serializes a field value for projected output.
///
/// Used by [`fixed_schema!`](crate::fixed_schema); a value that cannot be
/// represented as JSON becomes `null`.
#[doc(hidden)]
pub fn field_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Declares the field registry of a struct and implements
/// [`Record`](crate::Record) for it as a fixed-schema record.
///
/// Fields are listed as `"external_alias" => rust_field`, in declaration
/// order. When two entries share an alias the first one wins.
///
/// ```
/// use partial_core::{Record, Shape, fixed_schema};
///
/// struct Contact {
///     handle: String,
///     age: u32,
/// }
///
/// fixed_schema!(Contact {
///     "name" => handle,
///     "age" => age,
/// });
///
/// let contact = Contact { handle: "ada".to_string(), age: 36 };
/// let Shape::Fixed(schema) = contact.shape() else {
///     unreachable!()
/// };
/// let spec = schema.by_external("name").unwrap();
/// assert_eq!(spec.internal, "handle");
/// assert_eq!((spec.read)(&contact), serde_json::json!("ada"));
/// ```
#[macro_export]
macro_rules! fixed_schema {
    ($ty:ident { $($external:literal => $field:ident),+ $(,)? }) => {
        impl $crate::Record for $ty {
            fn shape(&self) -> $crate::Shape<'_, Self> {
                static FIELDS: &[$crate::FieldSpec<$ty>] = &[
                    $(
                        $crate::FieldSpec {
                            external: $external,
                            internal: stringify!($field),
                            read: |record: &$ty| $crate::schema::field_value(&record.$field),
                        },
                    )+
                ];
                static SCHEMA: $crate::Schema<$ty> = $crate::Schema::new(stringify!($ty), FIELDS);
                $crate::Shape::Fixed(&SCHEMA)
            }
        }
    };
}
