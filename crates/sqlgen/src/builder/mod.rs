//! Rendering of queries and conditions into SQL strings with bind arguments.

use crate::condition::{Condition, Operand};
use crate::ident::Identifier;
use crate::query::{Join, Query, SortOrder};
use crate::value::Value;

/// Mutable state for one top-level render pass.
///
/// The counter starts at 1 and advances once per bound value, so the i-th
/// placeholder in the output always corresponds to `args[i - 1]`. Each call
/// to [`Builder::find`] or [`Builder::condition`] (and each standalone
/// clause helper) allocates its own context, which is what makes a shared
/// `Builder` safe to use from parallel renders.
#[derive(Debug)]
struct RenderCtx {
    counter: usize,
    args: Vec<Value>,
}

impl RenderCtx {
    fn new() -> Self {
        Self {
            counter: 1,
            args: Vec::new(),
        }
    }
}

/// Renders [`Query`] and [`Condition`] values into SQL text plus an ordered
/// argument list.
///
/// A builder holds only its placeholder configuration:
///
/// - anonymous dialect: `Builder::new("?", false)` — every placeholder is
///   the literal prefix;
/// - ordinal dialect: `Builder::new("$", true)` — placeholders are `$1`,
///   `$2`, … in emission order (PostgreSQL-compatible).
///
/// ```
/// use sqlgen::{Builder, Condition, Query, ident};
///
/// let query = Query::new("users").and_where(Condition::eq(ident("id"), 10));
/// let (sql, args) = Builder::new("$", true).find(&query);
/// assert_eq!(sql, "SELECT * FROM users WHERE id=$1;");
/// assert_eq!(args.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    prefix: String,
    ordinal: bool,
}

impl Builder {
    /// Create a builder with the given placeholder prefix.
    ///
    /// When `ordinal` is true, placeholders carry a 1-based position suffix
    /// (`$1`, `$2`, …); otherwise every placeholder is the bare prefix.
    pub fn new(prefix: impl Into<String>, ordinal: bool) -> Self {
        Self {
            prefix: prefix.into(),
            ordinal,
        }
    }

    /// Render a full SELECT statement, terminated with `;`.
    ///
    /// Clauses are rendered in SQL order (joins, WHERE, GROUP BY, HAVING,
    /// ORDER BY, OFFSET, LIMIT) with one shared placeholder counter, so
    /// WHERE arguments precede HAVING arguments in the returned list. Empty
    /// clauses are dropped.
    pub fn find(&self, query: &Query) -> (String, Vec<Value>) {
        let mut ctx = RenderCtx::new();
        let pieces = [
            self.select(query.distinct, &query.fields),
            self.from(&query.collection),
            self.render_joins(&query.join_clauses, &mut ctx),
            self.render_where(&query.where_condition, &mut ctx),
            self.group_by(&query.group_by),
            self.render_having(&query.having_condition, &mut ctx),
            self.order_by(&query.order_by),
            self.offset(query.offset),
            self.limit(query.limit),
        ];
        let mut sql = pieces
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        sql.push(';');

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlgen.sql",
            sql = %sql,
            args = ctx.args.len(),
            "rendered select"
        );

        (sql, ctx.args)
    }

    /// Render a condition tree standalone, with a fresh counter.
    pub fn condition(&self, cond: &Condition) -> (String, Vec<Value>) {
        let mut ctx = RenderCtx::new();
        let sql = self.render_condition(cond, &mut ctx);
        (sql, ctx.args)
    }

    /// `SELECT [DISTINCT] <fields>`. An empty field list projects `*`.
    pub fn select<S: AsRef<str>>(&self, distinct: bool, fields: &[S]) -> String {
        let mut sql = String::from(if distinct {
            "SELECT DISTINCT "
        } else {
            "SELECT "
        });
        if fields.is_empty() {
            sql.push('*');
        } else {
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(field.as_ref());
            }
        }
        sql
    }

    /// `FROM <collection>`.
    pub fn from(&self, collection: &str) -> String {
        format!("FROM {collection}")
    }

    /// Render join clauses standalone, with a fresh counter.
    pub fn join(&self, joins: &[Join]) -> (String, Vec<Value>) {
        let mut ctx = RenderCtx::new();
        let sql = self.render_joins(joins, &mut ctx);
        (sql, ctx.args)
    }

    /// Render a WHERE clause standalone, with a fresh counter.
    pub fn where_clause(&self, cond: &Condition) -> (String, Vec<Value>) {
        let mut ctx = RenderCtx::new();
        let sql = self.render_where(cond, &mut ctx);
        (sql, ctx.args)
    }

    /// Render a HAVING clause standalone, with a fresh counter.
    pub fn having(&self, cond: &Condition) -> (String, Vec<Value>) {
        let mut ctx = RenderCtx::new();
        let sql = self.render_having(cond, &mut ctx);
        (sql, ctx.args)
    }

    /// `GROUP BY a, b, …`, or nothing for an empty list.
    pub fn group_by<S: AsRef<str>>(&self, cols: &[S]) -> String {
        if cols.is_empty() {
            return String::new();
        }
        let cols: Vec<&str> = cols.iter().map(AsRef::as_ref).collect();
        format!("GROUP BY {}", cols.join(", "))
    }

    /// `ORDER BY field ASC, …`, or nothing for an empty list.
    pub fn order_by(&self, orders: &[SortOrder]) -> String {
        if orders.is_empty() {
            return String::new();
        }
        let orders: Vec<String> = orders
            .iter()
            .map(|o| format!("{} {}", o.field, o.direction.as_str()))
            .collect();
        format!("ORDER BY {}", orders.join(", "))
    }

    /// `OFFSET n`, or nothing when `n` is 0.
    pub fn offset(&self, n: u64) -> String {
        if n == 0 {
            String::new()
        } else {
            format!("OFFSET {n}")
        }
    }

    /// `LIMIT n`, or nothing when `n` is 0.
    pub fn limit(&self, n: u64) -> String {
        if n == 0 {
            String::new()
        } else {
            format!("LIMIT {n}")
        }
    }

    fn render_joins(&self, joins: &[Join], ctx: &mut RenderCtx) -> String {
        let pieces: Vec<String> = joins
            .iter()
            .map(|join| {
                let on = self.render_condition(&join.condition, ctx);
                if on.is_empty() {
                    format!("{} {}", join.mode, join.collection)
                } else {
                    format!("{} {} ON {}", join.mode, join.collection, on)
                }
            })
            .collect();
        pieces.join(" ")
    }

    fn render_where(&self, cond: &Condition, ctx: &mut RenderCtx) -> String {
        let sql = self.render_condition(cond, ctx);
        if sql.is_empty() {
            sql
        } else {
            format!("WHERE {sql}")
        }
    }

    fn render_having(&self, cond: &Condition, ctx: &mut RenderCtx) -> String {
        let sql = self.render_condition(cond, ctx);
        if sql.is_empty() {
            sql
        } else {
            format!("HAVING {sql}")
        }
    }

    fn render_condition(&self, cond: &Condition, ctx: &mut RenderCtx) -> String {
        match cond {
            Condition::And(children) => self.render_group(children, " AND ", ctx),
            Condition::Or(children) => self.render_group(children, " OR ", ctx),
            Condition::Xor(children) => self.render_group(children, " XOR ", ctx),
            Condition::Not(children) => {
                // NOT negates the implicit AND of its children.
                let inner = self.render_group(children, " AND ", ctx);
                if inner.is_empty() {
                    inner
                } else {
                    format!("NOT {inner}")
                }
            }
            Condition::Compare { op, left, right } => {
                let left = self.render_operand(left, ctx);
                let right = self.render_operand(right, ctx);
                format!("{left}{}{right}", op.token())
            }
            Condition::Nil(column) => format!("{} IS NULL", column.as_str()),
            Condition::NotNil(column) => format!("{} IS NOT NULL", column.as_str()),
            Condition::In { column, values } => self.render_in(column, values, "IN", ctx),
            Condition::Nin { column, values } => self.render_in(column, values, "NOT IN", ctx),
            Condition::Like { column, pattern } => {
                let column = self.render_operand(column, ctx);
                let pattern = self.bind(pattern.clone(), ctx);
                format!("{column} LIKE {pattern}")
            }
            Condition::NotLike { column, pattern } => {
                let column = self.render_operand(column, ctx);
                let pattern = self.bind(pattern.clone(), ctx);
                format!("{column} NOT LIKE {pattern}")
            }
            Condition::Fragment(sql) => sql.clone(),
        }
    }

    /// Render a logical group: drop children that rendered empty, unwrap a
    /// lone survivor, parenthesize two or more.
    fn render_group(&self, children: &[Condition], sep: &str, ctx: &mut RenderCtx) -> String {
        let mut rendered: Vec<String> = children
            .iter()
            .map(|child| self.render_condition(child, ctx))
            .filter(|sql| !sql.is_empty())
            .collect();
        match rendered.len() {
            0 => String::new(),
            1 => rendered.remove(0),
            _ => format!("({})", rendered.join(sep)),
        }
    }

    fn render_in(
        &self,
        column: &Identifier,
        values: &[Value],
        keyword: &str,
        ctx: &mut RenderCtx,
    ) -> String {
        let placeholders: Vec<String> = values
            .iter()
            .map(|value| self.bind(value.clone(), ctx))
            .collect();
        format!("{} {} ({})", column.as_str(), keyword, placeholders.join(","))
    }

    fn render_operand(&self, operand: &Operand, ctx: &mut RenderCtx) -> String {
        match operand {
            Operand::Ident(ident) => ident.as_str().to_string(),
            Operand::Value(value) => self.bind(value.clone(), ctx),
        }
    }

    /// Emit the next placeholder and append `value` to the argument list.
    fn bind(&self, value: Value, ctx: &mut RenderCtx) -> String {
        let n = ctx.counter;
        ctx.counter += 1;
        ctx.args.push(value);
        self.placeholder(n)
    }

    fn placeholder(&self, n: usize) -> String {
        if self.ordinal {
            format!("{}{}", self.prefix, n)
        } else {
            self.prefix.clone()
        }
    }
}
