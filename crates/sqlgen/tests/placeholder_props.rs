//! Property tests for the placeholder/argument contract.
//!
//! Whatever the shape of the condition tree, the rendered SQL and the
//! argument list must stay in lockstep: one placeholder per argument, in
//! order, and the two dialects must agree on everything except the
//! placeholder tokens themselves.

use proptest::prelude::*;

use sqlgen::{Builder, Condition, Query, Value, ident};

fn column() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z0-9 ]{0,12}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn leaf() -> impl Strategy<Value = Condition> {
    prop_oneof![
        (column(), value()).prop_map(|(c, v)| Condition::eq(ident(c), v)),
        (column(), value()).prop_map(|(c, v)| Condition::gt(ident(c), v)),
        (value(), value()).prop_map(|(a, b)| Condition::ne(a, b)),
        column().prop_map(|c| Condition::nil(c)),
        column().prop_map(|c| Condition::not_nil(c)),
        (column(), prop::collection::vec(value(), 0..4))
            .prop_map(|(c, vs)| Condition::in_list(c, vs)),
        (column(), prop::collection::vec(value(), 0..4))
            .prop_map(|(c, vs)| Condition::not_in(c, vs)),
        (column(), "[a-z%]{1,8}").prop_map(|(c, p)| Condition::like(c, p)),
    ]
}

fn condition() -> impl Strategy<Value = Condition> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::and),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::or),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::xor),
            prop::collection::vec(inner, 0..3).prop_map(Condition::not),
        ]
    })
}

/// Ordinal placeholder numbers in textual order.
fn ordinal_placeholders(sql: &str) -> Vec<usize> {
    let mut out = Vec::new();
    let mut chars = sql.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            continue;
        }
        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if let Ok(n) = digits.parse() {
            out.push(n);
        }
    }
    out
}

/// Rewrite each `$N` placeholder back to a bare `?`.
fn normalize_ordinal(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                chars.next();
            } else {
                break;
            }
        }
        if digits.is_empty() {
            out.push('$');
        } else {
            out.push('?');
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn placeholder_count_matches_args(cond in condition()) {
        let (sql, args) = Builder::new("?", false).condition(&cond);
        prop_assert_eq!(sql.matches('?').count(), args.len());
    }

    #[test]
    fn ordinal_placeholders_count_up_from_one(cond in condition()) {
        let (sql, args) = Builder::new("$", true).condition(&cond);
        let expected: Vec<usize> = (1..=args.len()).collect();
        prop_assert_eq!(ordinal_placeholders(&sql), expected);
    }

    #[test]
    fn dialects_differ_only_in_placeholder_tokens(cond in condition()) {
        let (anon_sql, anon_args) = Builder::new("?", false).condition(&cond);
        let (ord_sql, ord_args) = Builder::new("$", true).condition(&cond);
        prop_assert_eq!(normalize_ordinal(&ord_sql), anon_sql);
        prop_assert_eq!(anon_args, ord_args);
    }

    #[test]
    fn find_ends_in_exactly_one_semicolon(
        where_cond in condition(),
        having_cond in condition(),
        offset in 0u64..100,
        limit in 0u64..100,
    ) {
        let query = Query::new("users")
            .and_where(where_cond)
            .group(&["kind"])
            .and_having(having_cond)
            .offset(offset)
            .limit(limit);
        let (sql, _args) = Builder::new("$", true).find(&query);
        prop_assert!(sql.ends_with(';'));
        prop_assert_eq!(sql.matches(';').count(), 1);
    }

    #[test]
    fn find_counter_spans_clauses_in_order(
        where_cond in condition(),
        having_cond in condition(),
    ) {
        let query = Query::new("users")
            .and_where(where_cond)
            .and_having(having_cond);
        let (sql, args) = Builder::new("$", true).find(&query);
        let expected: Vec<usize> = (1..=args.len()).collect();
        prop_assert_eq!(ordinal_placeholders(&sql), expected);
    }

    #[test]
    fn identifier_operands_bind_nothing(a in column(), b in column()) {
        let cond = Condition::and(vec![
            Condition::eq(ident(a.as_str()), ident(b.as_str())),
            Condition::nil(a.as_str()),
            Condition::not_nil(b.as_str()),
        ]);
        let (sql, args) = Builder::new("$", true).condition(&cond);
        prop_assert!(args.is_empty());
        prop_assert!(!sql.contains('$'));
    }
}
