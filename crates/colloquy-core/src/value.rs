// SPDX-License-Identifier: Apache-2.0
//! The closed set of value kinds that dialogue memory can hold.
//!
//! Guards, parameterized events, and memory writes are all generic over
//! [`MemoryValue`] instead of carrying one hand-written variant per kind.
//! The [`ValueKind`] tag is assigned at construction time; nothing in the
//! engine inspects types at runtime.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::memory::MemoryStore;

/// Tag identifying one of the three supported value kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// 64-bit signed integer.
    Int,
    /// UTF-8 text.
    Text,
    /// Boolean flag.
    Bool,
}

impl ValueKind {
    /// Human-readable label for editor surfaces and diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::Bool => "bool",
        }
    }
}

/// One typed literal, tagged with its kind.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Value {
    /// Integer literal.
    Int(i64),
    /// Text literal.
    Text(String),
    /// Boolean literal.
    Bool(bool),
}

impl Value {
    /// Kind tag of the carried literal.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Text(_) => ValueKind::Text,
            Self::Bool(_) => ValueKind::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Comparison operator carried by a guarded destination.
///
/// All five operators are meaningful for integer guards. Text and boolean
/// guards can only hold under `Eq`; the remaining operators evaluate to
/// "condition not met" for those kinds rather than failing (see
/// [`MemoryValue::satisfies`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Cmp {
    /// Exact equality.
    #[serde(rename = "=")]
    Eq,
    /// Strictly less than.
    #[serde(rename = "<")]
    Lt,
    /// Strictly greater than.
    #[serde(rename = ">")]
    Gt,
    /// Less than or equal.
    #[serde(rename = "<=")]
    Le,
    /// Greater than or equal.
    #[serde(rename = ">=")]
    Ge,
}

impl Cmp {
    /// The operator's source-form symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A primitive kind storable in dialogue memory.
///
/// Implemented for exactly `i64`, `String`, and `bool`. Reads are lenient:
/// a missing key loads as the kind's zero value (`0`, empty text, `false`)
/// instead of erroring.
pub trait MemoryValue: Clone + Sized {
    /// Kind tag assigned at construction time.
    const KIND: ValueKind;

    /// Reads this kind's entry for `key`, zero value on a miss.
    fn load(store: &MemoryStore, key: &str) -> Self;

    /// Whether `stored op literal` holds for this kind.
    fn satisfies(op: Cmp, stored: &Self, literal: &Self) -> bool;

    /// Wraps the value in the tagged union.
    fn into_value(self) -> Value;
}

impl MemoryValue for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn load(store: &MemoryStore, key: &str) -> Self {
        store.get_int(key)
    }

    fn satisfies(op: Cmp, stored: &Self, literal: &Self) -> bool {
        match op {
            Cmp::Eq => stored == literal,
            Cmp::Lt => stored < literal,
            Cmp::Gt => stored > literal,
            Cmp::Le => stored <= literal,
            Cmp::Ge => stored >= literal,
        }
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl MemoryValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn load(store: &MemoryStore, key: &str) -> Self {
        store.get_text(key)
    }

    // Only equality can hold for text.
    fn satisfies(op: Cmp, stored: &Self, literal: &Self) -> bool {
        matches!(op, Cmp::Eq) && stored == literal
    }

    fn into_value(self) -> Value {
        Value::Text(self)
    }
}

impl MemoryValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn load(store: &MemoryStore, key: &str) -> Self {
        store.get_bool(key)
    }

    // Only equality can hold for booleans.
    fn satisfies(op: Cmp, stored: &Self, literal: &Self) -> bool {
        matches!(op, Cmp::Eq) && stored == literal
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn int_operators_follow_ordering() {
        assert!(<i64 as MemoryValue>::satisfies(Cmp::Eq, &5, &5));
        assert!(<i64 as MemoryValue>::satisfies(Cmp::Lt, &4, &5));
        assert!(<i64 as MemoryValue>::satisfies(Cmp::Gt, &6, &5));
        assert!(<i64 as MemoryValue>::satisfies(Cmp::Le, &5, &5));
        assert!(<i64 as MemoryValue>::satisfies(Cmp::Ge, &5, &5));
        assert!(!<i64 as MemoryValue>::satisfies(Cmp::Lt, &5, &5));
        assert!(!<i64 as MemoryValue>::satisfies(Cmp::Gt, &5, &5));
    }

    #[test]
    fn non_equality_is_always_false_for_text_and_bool() {
        let a = String::from("ash");
        for op in [Cmp::Lt, Cmp::Gt, Cmp::Le, Cmp::Ge] {
            assert!(!<String as MemoryValue>::satisfies(op, &a, &a));
            assert!(!<bool as MemoryValue>::satisfies(op, &true, &true));
        }
        assert!(<String as MemoryValue>::satisfies(Cmp::Eq, &a, &a));
        assert!(<bool as MemoryValue>::satisfies(Cmp::Eq, &false, &false));
    }

    #[test]
    fn operator_symbols_round_trip_through_serde() {
        for op in [Cmp::Eq, Cmp::Lt, Cmp::Gt, Cmp::Le, Cmp::Ge] {
            let doc = serde_json::to_string(&op).unwrap();
            assert_eq!(doc, format!("\"{}\"", op.symbol()));
            let back: Cmp = serde_json::from_str(&doc).unwrap();
            assert_eq!(back, op);
        }
    }
}
