//! Declarative filter and sort queries over in-memory collections.
//!
//! A [`Query`] is built fluently from clauses and ordering keys, then run
//! against a slice through an accessor that exposes each record's fields as
//! runtime [`Value`]s. Evaluation is eager, single pass and pure: the input
//! is never mutated and results borrow from it.
//!
//! ```rust
//! use linqs_query::{Query, Value};
//!
//! let cities = vec!["New York", "Los Angeles", "Chicago", "Newark"];
//!
//! fn accessor<'a>(city: &'a &'static str, _field: &str) -> Value<'a> {
//!     Value::String(city)
//! }
//!
//! let results = Query::new()
//!     .and_startswith("name", "Ne")
//!     .order_desc("name")
//!     .filter(&cities, accessor);
//! assert_eq!(results, vec![&"Newark", &"New York"]);
//! ```
//!
//! An item is kept when every `and` clause holds, at least one `or` clause
//! holds (if there are any), and no `not` clause holds. Kept items stay in
//! input order unless ordering keys are given; the sort is stable.
//!
//! Which operators apply to which field kinds is listed on [`Op`]. Records
//! usually expose their fields by implementing [`Queryable`], by hand or
//! with `linqs-macros`.

mod clause;
mod error;
mod op;
mod ordering;
mod query;
mod traits;
mod value;

pub use clause::{Clause, ClauseValue};
pub use error::{QueryError, Result};
pub use op::{Kind, Op};
pub use ordering::{compare_by_orderings, compare_values, Dir, OrderBy};
pub use query::Query;
pub use traits::{QueryEnum, QueryTimestamp, Queryable};
pub use value::{Number, Timestamp, Value};
