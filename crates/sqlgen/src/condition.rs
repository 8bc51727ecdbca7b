//! Condition trees for WHERE and HAVING clauses.
//!
//! A [`Condition`] is a recursive boolean expression over comparisons, NULL
//! checks, membership tests, pattern matches, and raw fragments, combined
//! with AND/OR/XOR/NOT groups. Conditions are pure data; rendering into SQL
//! text and an argument list is done by [`Builder`](crate::Builder).

use crate::ident::Identifier;
use crate::value::Value;

/// Comparison operator of a [`Condition::Compare`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    /// The literal SQL token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
        }
    }
}

/// One side of a comparison: a column reference or a bound value.
///
/// Identifiers render verbatim and never touch the argument list; values
/// render as placeholders and append exactly one argument each.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Ident(Identifier),
    Value(Value),
}

/// Conversion into an [`Operand`].
///
/// [`Identifier`]s (and references to them) become column references;
/// anything convertible into a [`Value`] becomes a bound value. A plain
/// string is a *value* here — wrap it with [`ident`](crate::ident) to
/// reference a column instead.
pub trait IntoOperand {
    fn into_operand(self) -> Operand;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Operand {
        self
    }
}

impl IntoOperand for Identifier {
    fn into_operand(self) -> Operand {
        Operand::Ident(self)
    }
}

impl IntoOperand for &Identifier {
    fn into_operand(self) -> Operand {
        Operand::Ident(self.clone())
    }
}

impl IntoOperand for Value {
    fn into_operand(self) -> Operand {
        Operand::Value(self)
    }
}

macro_rules! impl_into_operand_for_values {
    ($($t:ty),* $(,)?) => {$(
        impl IntoOperand for $t {
            fn into_operand(self) -> Operand {
                Operand::Value(Value::from(self))
            }
        }
    )*};
}

impl_into_operand_for_values!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    &str,
    String,
    &[u8],
    Vec<u8>,
    serde_json::Value,
);

/// A node in the boolean expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// All children must hold. Zero children is the empty condition.
    And(Vec<Condition>),
    /// At least one child must hold.
    Or(Vec<Condition>),
    /// Exactly one child must hold.
    Xor(Vec<Condition>),
    /// Negation of the implicit AND of the children.
    Not(Vec<Condition>),
    /// `left op right`, either side a column reference or a bound value.
    Compare {
        op: CompareOp,
        left: Operand,
        right: Operand,
    },
    /// `column IS NULL`.
    Nil(Identifier),
    /// `column IS NOT NULL`.
    NotNil(Identifier),
    /// `column IN (…)`, one placeholder per value.
    In {
        column: Identifier,
        values: Vec<Value>,
    },
    /// `column NOT IN (…)`.
    Nin {
        column: Identifier,
        values: Vec<Value>,
    },
    /// `column LIKE pattern`.
    Like { column: Operand, pattern: Value },
    /// `column NOT LIKE pattern`.
    NotLike { column: Operand, pattern: Value },
    /// Raw SQL emitted verbatim with no bound arguments.
    Fragment(String),
}

/// The empty conjunction, which renders to nothing.
impl Default for Condition {
    fn default() -> Self {
        Condition::And(Vec::new())
    }
}

impl Condition {
    /// AND group. With zero children this is the empty condition.
    pub fn and(children: Vec<Condition>) -> Self {
        Condition::And(children)
    }

    /// OR group.
    pub fn or(children: Vec<Condition>) -> Self {
        Condition::Or(children)
    }

    /// XOR group.
    pub fn xor(children: Vec<Condition>) -> Self {
        Condition::Xor(children)
    }

    /// Negate the implicit AND of `children`.
    pub fn not(children: Vec<Condition>) -> Self {
        Condition::Not(children)
    }

    fn compare(op: CompareOp, left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Condition::Compare {
            op,
            left: left.into_operand(),
            right: right.into_operand(),
        }
    }

    /// `left = right`.
    pub fn eq(left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Self::compare(CompareOp::Eq, left, right)
    }

    /// `left <> right`.
    pub fn ne(left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Self::compare(CompareOp::Ne, left, right)
    }

    /// `left < right`.
    pub fn lt(left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Self::compare(CompareOp::Lt, left, right)
    }

    /// `left <= right`.
    pub fn lte(left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Self::compare(CompareOp::Lte, left, right)
    }

    /// `left > right`.
    pub fn gt(left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Self::compare(CompareOp::Gt, left, right)
    }

    /// `left >= right`.
    pub fn gte(left: impl IntoOperand, right: impl IntoOperand) -> Self {
        Self::compare(CompareOp::Gte, left, right)
    }

    /// `column IS NULL`.
    pub fn nil(column: impl Into<Identifier>) -> Self {
        Condition::Nil(column.into())
    }

    /// `column IS NOT NULL`.
    pub fn not_nil(column: impl Into<Identifier>) -> Self {
        Condition::NotNil(column.into())
    }

    /// `column IN (values…)`.
    pub fn in_list<V: Into<Value>>(column: impl Into<Identifier>, values: Vec<V>) -> Self {
        Condition::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `column NOT IN (values…)`.
    pub fn not_in<V: Into<Value>>(column: impl Into<Identifier>, values: Vec<V>) -> Self {
        Condition::Nin {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `column LIKE pattern`. The column coerces to an identifier, so both
    /// `like("name", …)` and `like(ident("name"), …)` reference the column.
    pub fn like(column: impl Into<Identifier>, pattern: impl Into<Value>) -> Self {
        Condition::Like {
            column: Operand::Ident(column.into()),
            pattern: pattern.into(),
        }
    }

    /// `column NOT LIKE pattern`.
    pub fn not_like(column: impl Into<Identifier>, pattern: impl Into<Value>) -> Self {
        Condition::NotLike {
            column: Operand::Ident(column.into()),
            pattern: pattern.into(),
        }
    }

    /// Raw SQL condition. No arguments are bound.
    ///
    /// The fragment is emitted verbatim; the caller is responsible for its
    /// safety.
    pub fn fragment(sql: impl Into<String>) -> Self {
        Condition::Fragment(sql.into())
    }

    /// True when rendering would produce no output: a logical group with no
    /// children.
    pub fn is_empty(&self) -> bool {
        match self {
            Condition::And(children)
            | Condition::Or(children)
            | Condition::Xor(children)
            | Condition::Not(children) => children.is_empty(),
            _ => false,
        }
    }
}
