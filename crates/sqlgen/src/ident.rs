//! SQL identifier handling.
//!
//! An [`Identifier`] is a column or table reference that is emitted into the
//! rendered SQL exactly as supplied. Identifiers never become placeholders
//! and never contribute to the argument list.
//!
//! Construction via [`ident`] (or the `From` conversions) performs no
//! validation: callers supply trusted or pre-quoted names. When a name comes
//! from an untrusted source, [`Identifier::parse`] gates it through a lexical
//! check first; the accepted text is still rendered verbatim.

use crate::error::{BuildError, BuildResult};

/// A column, table, or schema reference rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap a name without validation.
    ///
    /// Wrapping an identifier again is a no-op, so
    /// `Identifier::new(ident("f")) == ident("f")`.
    pub fn new(name: impl Into<Identifier>) -> Self {
        name.into()
    }

    /// Validate the lexical shape of a dotted identifier, keeping the text
    /// verbatim on success.
    ///
    /// Each dot-separated segment must be either an unquoted name matching
    /// `[A-Za-z_][A-Za-z0-9_$]*` or a double-quoted segment (with `""` as
    /// the quote escape).
    pub fn parse(s: &str) -> BuildResult<Self> {
        if s.is_empty() {
            return Err(BuildError::invalid_identifier("empty identifier"));
        }

        let mut chars = s.chars().peekable();
        let mut first_segment = true;
        while chars.peek().is_some() {
            if !first_segment {
                match chars.next() {
                    Some('.') if chars.peek().is_some() => {}
                    Some('.') => {
                        return Err(BuildError::invalid_identifier(format!(
                            "trailing '.' in {s:?}"
                        )));
                    }
                    Some(c) => {
                        return Err(BuildError::invalid_identifier(format!(
                            "expected '.' between segments of {s:?}, got {c:?}"
                        )));
                    }
                    None => break,
                }
            }
            first_segment = false;

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut len = 0usize;
                loop {
                    match chars.next() {
                        Some('"') if chars.peek() == Some(&'"') => {
                            chars.next();
                            len += 1;
                        }
                        Some('"') => break,
                        Some(_) => len += 1,
                        None => {
                            return Err(BuildError::invalid_identifier(format!(
                                "unclosed quote in {s:?}"
                            )));
                        }
                    }
                }
                if len == 0 {
                    return Err(BuildError::invalid_identifier(format!(
                        "empty quoted segment in {s:?}"
                    )));
                }
                continue;
            }

            let mut len = 0usize;
            while let Some(&c) = chars.peek() {
                if c == '.' {
                    break;
                }
                let ok = if len == 0 {
                    c == '_' || c.is_ascii_alphabetic()
                } else {
                    c == '_' || c == '$' || c.is_ascii_alphanumeric()
                };
                if !ok {
                    return Err(BuildError::invalid_identifier(format!(
                        "invalid character {c:?} in {s:?}"
                    )));
                }
                chars.next();
                len += 1;
            }
            if len == 0 {
                return Err(BuildError::invalid_identifier(format!(
                    "empty segment in {s:?}"
                )));
            }
        }

        Ok(Identifier(s.to_string()))
    }

    /// The identifier text as it will appear in the rendered SQL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier(name.to_string())
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier(name)
    }
}

impl From<&Identifier> for Identifier {
    fn from(ident: &Identifier) -> Self {
        ident.clone()
    }
}

/// Wrap a name as an [`Identifier`].
///
/// This is the operand marker used at comparison positions: wrapped names
/// render verbatim, unwrapped values render as placeholders. Double wrapping
/// flattens: `ident(ident("field")) == ident("field")`.
pub fn ident(name: impl Into<Identifier>) -> Identifier {
    name.into()
}
