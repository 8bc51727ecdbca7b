//! # sqlgen
//!
//! A dialect-agnostic SQL SELECT builder. A [`Query`] describes one SELECT
//! statement as plain data (collection, projection, joins, condition trees,
//! grouping, ordering, offset/limit); a [`Builder`] renders it into a SQL
//! string plus a positionally-ordered argument list for prepared-statement
//! binding.
//!
//! The builder is configured with a placeholder prefix and an ordinal flag,
//! which is enough to cover both the anonymous `?` style and the
//! PostgreSQL-style `$1, $2, …` numbering through one code path:
//!
//! ```
//! use sqlgen::{Builder, Condition, Query, SortOrder, ident};
//!
//! let query = Query::new("users")
//!     .and_where(Condition::eq(ident("status"), "active"))
//!     .order([SortOrder::desc("created_at")])
//!     .limit(10);
//!
//! let (sql, args) = Builder::new("?", false).find(&query);
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM users WHERE status=? ORDER BY created_at DESC LIMIT 10;"
//! );
//! assert_eq!(args, vec![sqlgen::Value::from("active")]);
//! ```
//!
//! At every comparison position an operand is either an *identifier*
//! (wrapped with [`ident`], emitted verbatim) or a *value* (anything else,
//! emitted as a placeholder and appended to the argument list). Rendering is
//! total: any condition tree produces output, and empty logical groups
//! simply vanish from the statement.

mod builder;
mod condition;
mod error;
mod ident;
pub mod prelude;
mod query;
mod value;

pub use builder::Builder;
pub use condition::{CompareOp, Condition, IntoOperand, Operand};
pub use error::{BuildError, BuildResult};
pub use ident::{Identifier, ident};
pub use query::{Join, Query, SortDir, SortOrder};
pub use value::Value;
