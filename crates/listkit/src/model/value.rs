//! Field value semantics.
//!
//! Item fields hold [`serde_json::Value`]s. Filtering and sorting need a few
//! loosely-typed rules on top of them: which values count as "empty", how a
//! non-text value reads as text, and how two arbitrary values order.

use std::cmp::Ordering;

use serde_json::Value;

/// Returns `true` if the value counts as present for filtering and selection.
///
/// Null, `false`, zero, NaN and the empty string are falsy. Sequences and
/// mappings are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a value as text for substring matching.
///
/// Integral numbers have no fractional part (`3.0` reads as `"3"`), very
/// large or small magnitudes use exponent notation (`1e+21`), sequences join their elements with commas (null elements render empty) and
/// mappings read as `[object Object]`.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(float_text).unwrap_or_default()
    }
}

/// Shortest round-trip form of a float. Magnitudes at or above `1e21` or
/// below `1e-6` use exponent notation with a signed exponent (`1e+21`,
/// `1.5e-7`); everything else is positional without a trailing `.0`.
fn float_text(f: f64) -> String {
    let magnitude = f.abs();
    if f.is_finite() && f != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{f:e}");
        match text.split_once('e') {
            Some((digits, exponent)) if !exponent.starts_with('-') => {
                format!("{digits}e+{exponent}")
            }
            _ => text,
        }
    } else {
        f.to_string()
    }
}

/// Returns `true` if `value` matches `query` as a substring.
///
/// Text values are compared case-insensitively. Other values are rendered
/// with [`to_text`] and searched for `query` exactly as given. Falsy values
/// never match.
pub fn matches_query(value: &Value, query: &str) -> bool {
    if !is_truthy(value) {
        return false;
    }
    match value {
        Value::String(s) => s.to_lowercase().contains(&query.to_lowercase()),
        other => to_text(other).contains(query),
    }
}

/// A totally ordered key extracted from a field value for sorting.
///
/// Kinds rank `Null < Bool < Number < Text < Composite`; within a kind,
/// values compare natively. Text keys are lowercased so that sorting is
/// case-insensitive.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Missing field or null.
    Null,
    /// Boolean (`false < true`).
    Bool(bool),
    /// Number, compared with IEEE 754 total ordering.
    Number(f64),
    /// Lowercased text.
    Text(String),
    /// Sequence or mapping, compared by its text form.
    Composite(String),
}

impl SortKey {
    /// Extracts the sort key of an optional field value.
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => SortKey::Null,
            Some(Value::Bool(b)) => SortKey::Bool(*b),
            Some(Value::Number(n)) => SortKey::Number(n.as_f64().unwrap_or(f64::NAN)),
            Some(Value::String(s)) => SortKey::Text(s.to_lowercase()),
            Some(other) => SortKey::Composite(to_text(other)),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Text(_) => 3,
            SortKey::Composite(_) => 4,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ordering::Equal,
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Composite(a), SortKey::Composite(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&json!(23)), "23");
        assert_eq!(to_text(&json!(2.5)), "2.5");
        assert_eq!(to_text(&json!(3.0)), "3");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&json!(["Cricket", "Football", null])), "Cricket,Football,");
        assert_eq!(to_text(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_to_text_exponent_form() {
        assert_eq!(to_text(&json!(1e21)), "1e+21");
        assert_eq!(to_text(&json!(-1.5e22)), "-1.5e+22");
        assert_eq!(to_text(&json!(1e-7)), "1e-7");
        assert_eq!(to_text(&json!(2.5e-8)), "2.5e-8");
        assert_eq!(to_text(&json!(1e20)), "100000000000000000000");
        assert_eq!(to_text(&json!(0.000001)), "0.000001");
        assert_eq!(to_text(&json!(0.1)), "0.1");

        assert!(matches_query(&json!(1e21), "e+21"));
        assert!(!matches_query(&json!(1e-7), "0000001"));
    }

    #[test]
    fn test_matches_query_text_is_case_insensitive() {
        assert!(matches_query(&json!("New York"), "NEW"));
        assert!(matches_query(&json!("NY"), "ny"));
        assert!(!matches_query(&json!("New York"), "ny"));
        assert!(matches_query(&json!("Boston"), ""));
    }

    #[test]
    fn test_matches_query_non_text_keeps_query_case() {
        assert!(matches_query(&json!(["Tennis", "Biking"]), "Bik"));
        assert!(!matches_query(&json!(["Tennis", "Biking"]), "bik"));
        assert!(matches_query(&json!(32), "3"));
        assert!(!matches_query(&json!(0), "0"));
        assert!(!matches_query(&json!(null), ""));
    }

    #[test]
    fn test_sort_key_order() {
        let mut keys = vec![
            SortKey::of(Some(&json!("bob"))),
            SortKey::of(Some(&json!(10))),
            SortKey::of(None),
            SortKey::of(Some(&json!("Alice"))),
            SortKey::of(Some(&json!(2))),
            SortKey::of(Some(&json!(true))),
        ];
        keys.sort();

        assert!(matches!(keys[0], SortKey::Null));
        assert!(matches!(keys[1], SortKey::Bool(true)));
        assert!(matches!(keys[2], SortKey::Number(n) if n == 2.0));
        assert!(matches!(keys[3], SortKey::Number(n) if n == 10.0));
        assert!(matches!(&keys[4], SortKey::Text(s) if s == "alice"));
        assert!(matches!(&keys[5], SortKey::Text(s) if s == "bob"));
    }

    #[test]
    fn test_sort_key_text_ignores_case() {
        assert_eq!(
            SortKey::of(Some(&json!("ALICE"))),
            SortKey::of(Some(&json!("alice")))
        );
        assert_eq!(SortKey::of(None), SortKey::of(Some(&json!(null))));
    }
}
