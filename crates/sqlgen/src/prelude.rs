//! Convenient imports for typical `sqlgen` usage.
//!
//! ```
//! use sqlgen::prelude::*;
//!
//! let query = Query::new("users").and_where(Condition::nil("deleted_at"));
//! let (sql, _args) = Builder::new("$", true).find(&query);
//! assert_eq!(sql, "SELECT * FROM users WHERE deleted_at IS NULL;");
//! ```

pub use crate::{
    Builder, Condition, Identifier, Join, Query, SortDir, SortOrder, Value, ident,
};
