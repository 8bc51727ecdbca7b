//! Query description and builder-style mutators.
//!
//! A [`Query`] is a plain value describing one SELECT statement. Mutators
//! consume and return the query; clone the base value to branch it into
//! several variants.

use crate::condition::Condition;

/// Sort direction of an ORDER BY entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// The SQL keyword for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// A single ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDir,
}

impl SortOrder {
    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDir::Asc,
        }
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDir::Desc,
        }
    }
}

/// One join clause.
///
/// `mode` is emitted verbatim (`"JOIN"`, `"INNER JOIN"`, `"LEFT JOIN"`, …).
/// The condition is expected to be equality-shaped; comparisons render flat
/// as `left=right`, so the clause comes out as `MODE table ON left=right`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub mode: String,
    pub collection: String,
    pub condition: Condition,
}

/// An immutable description of one SELECT statement.
///
/// `offset` and `limit` of 0 mean "no clause emitted".
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub fields: Vec<String>,
    pub distinct: bool,
    pub join_clauses: Vec<Join>,
    pub where_condition: Condition,
    pub group_by: Vec<String>,
    pub having_condition: Condition,
    pub order_by: Vec<SortOrder>,
    pub offset: u64,
    pub limit: u64,
}

impl Query {
    /// A `SELECT * FROM collection` query.
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            fields: vec!["*".to_string()],
            distinct: false,
            join_clauses: Vec::new(),
            where_condition: Condition::default(),
            group_by: Vec::new(),
            having_condition: Condition::default(),
            order_by: Vec::new(),
            offset: 0,
            limit: 0,
        }
    }

    /// Replace the projected field list.
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Set the DISTINCT flag.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// AND-combine `cond` with the existing WHERE condition.
    ///
    /// The first condition is stored as-is; later ones are grouped under a
    /// single AND, so `q.and_where(a).and_where(b)` renders `(a AND b)`.
    pub fn and_where(mut self, cond: Condition) -> Self {
        self.where_condition = merge_and(self.where_condition, cond);
        self
    }

    /// AND-combine `cond` with the existing HAVING condition.
    pub fn and_having(mut self, cond: Condition) -> Self {
        self.having_condition = merge_and(self.having_condition, cond);
        self
    }

    /// Append a plain `JOIN` clause.
    pub fn join(self, collection: &str, condition: Condition) -> Self {
        self.join_with("JOIN", collection, condition)
    }

    /// Append a join clause with an explicit mode such as `"INNER JOIN"`.
    pub fn join_with(mut self, mode: &str, collection: &str, condition: Condition) -> Self {
        self.join_clauses.push(Join {
            mode: mode.to_string(),
            collection: collection.to_string(),
            condition,
        });
        self
    }

    /// Replace the GROUP BY column list.
    pub fn group(mut self, cols: &[&str]) -> Self {
        self.group_by = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Append ORDER BY entries.
    pub fn order(mut self, orders: impl IntoIterator<Item = SortOrder>) -> Self {
        self.order_by.extend(orders);
        self
    }

    /// Set the row offset. 0 emits no clause.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = n;
        self
    }

    /// Set the row limit. 0 emits no clause.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = n;
        self
    }
}

fn merge_and(existing: Condition, cond: Condition) -> Condition {
    if existing.is_empty() {
        cond
    } else {
        Condition::And(vec![existing, cond])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::ident;

    #[test]
    fn new_query_projects_star() {
        let q = Query::new("users");
        assert_eq!(q.fields, vec!["*".to_string()]);
        assert!(q.where_condition.is_empty());
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, 0);
    }

    #[test]
    fn first_where_is_stored_unwrapped() {
        let cond = Condition::eq(ident("id"), 1);
        let q = Query::new("users").and_where(cond.clone());
        assert_eq!(q.where_condition, cond);
    }

    #[test]
    fn later_wheres_are_and_combined() {
        let a = Condition::eq(ident("a"), 1);
        let b = Condition::eq(ident("b"), 2);
        let q = Query::new("users").and_where(a.clone()).and_where(b.clone());
        assert_eq!(q.where_condition, Condition::And(vec![a, b]));
    }

    #[test]
    fn join_defaults_to_plain_mode() {
        let on = Condition::eq(ident("t.id"), ident("u.t_id"));
        let q = Query::new("users").join("t", on.clone());
        assert_eq!(q.join_clauses.len(), 1);
        assert_eq!(q.join_clauses[0].mode, "JOIN");
        assert_eq!(q.join_clauses[0].collection, "t");
        assert_eq!(q.join_clauses[0].condition, on);
    }

    #[test]
    fn order_appends() {
        let q = Query::new("users")
            .order([SortOrder::asc("name")])
            .order([SortOrder::desc("created_at")]);
        assert_eq!(
            q.order_by,
            vec![SortOrder::asc("name"), SortOrder::desc("created_at")]
        );
    }
}
