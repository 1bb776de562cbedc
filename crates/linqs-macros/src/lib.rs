//! Proc macros for linqs.
//!
//! - [`Queryable`] - derive field-name constants and a `Queryable` impl so a
//!   record can be filtered and sorted by `linqs-query`.
//!
//! For working examples, see the record types in the `linqs` crate
//! (`Employee`, `Student`).

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod queryable;

/// Derives the `Queryable` trait for records.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `text` | String field |
/// | `number` | Numeric field (any primitive convertible into `Number`) |
/// | `date` | Date/time field, requires a `QueryTimestamp` impl |
/// | `choice` | Enum field, requires a `QueryEnum` impl |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Query the field under a different name |
///
/// Fields without a `#[query(...)]` attribute are not queryable.
///
/// # Generated Code
///
/// 1. Field name constants (`Student::SURNAME`, `Student::AGE`, ...)
/// 2. `impl linqs_query::Queryable`
///
/// # Example
///
/// ```ignore
/// use linqs_macros::Queryable;
/// use linqs_query::{Query, Queryable};
///
/// #[derive(Queryable)]
/// struct Student {
///     #[query(text)]
///     surname: String,
///     #[query(number)]
///     age: u8,
///     #[query(skip)]
///     notes: String,
/// }
///
/// let query = Query::new()
///     .and_startswith(Student::SURNAME, "Bro")
///     .order_asc(Student::AGE)
///     .build();
/// let results = query.filter(&students, Student::accessor);
/// ```
#[proc_macro_derive(Queryable, attributes(query))]
pub fn queryable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    queryable::queryable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
