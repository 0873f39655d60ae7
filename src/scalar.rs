//! Scalar hook for serialization formats without a month type.
//!
//! A loader that reads untyped scalars (YAML, TOML, JSON strings, CSV cells)
//! can call [`tokenize`] on each one to pick out canonical `YYYY-MM` values,
//! and [`represent`] when writing them back. Only the form `Display` writes is
//! recognized here, at any year width (`"-5-03"`, `"12345-01"`);
//! `"January 2014"` stays plain text.

use crate::{Month, parse::parse_canonical};

/// A scalar after month detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    /// The scalar was a canonical month.
    Month(Month),
    /// Anything else, passed through untouched.
    Text(&'a str),
}

/// Returns the month if `value` is exactly a canonical scalar, as written by
/// [`represent`].
///
/// A canonical shape with an impossible month number (`"2014-13"`) is not a
/// month and yields `None`.
pub fn recognize(value: &str) -> Option<Month> {
    parse_canonical(value)?.ok()
}

/// Classifies a scalar as a month or plain text.
pub fn tokenize(value: &str) -> Scalar<'_> {
    recognize(value).map_or(Scalar::Text(value), Scalar::Month)
}

/// Renders a month as its canonical scalar.
pub fn represent(month: &Month) -> String {
    month.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::month;
    use serde_json::{Value, json};

    /// Runs every string in a JSON document through the hook, returning how many were months.
    fn normalize(value: &mut Value) -> usize {
        match value {
            Value::String(s) => match recognize(s) {
                Some(m) => {
                    *s = represent(&m);
                    1
                },
                None => 0,
            },
            Value::Array(items) => items.iter_mut().map(normalize).sum(),
            Value::Object(fields) => fields.values_mut().map(normalize).sum(),
            _ => 0,
        }
    }

    #[test]
    fn test_recognize() {
        assert_eq!(recognize("2014-01"), Some(month(2014, 1)));
        assert_eq!(recognize("1999-12"), Some(month(1999, 12)));
        assert_eq!(recognize("812-03"), Some(month(812, 3)));
        assert_eq!(recognize("-5-03"), Some(month(-5, 3)));
        assert_eq!(recognize("12345-01"), Some(month(12345, 1)));
    }

    #[test]
    fn test_recognize_rejects_other_scalars() {
        for value in ["", "2014 JAN", "January 2014", "2014-1", "2014-13", "2014-01-01", "hello", "201401"] {
            assert_eq!(recognize(value), None, "{value:?}");
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("2014-01"), Scalar::Month(month(2014, 1)));
        assert_eq!(tokenize("January 2014"), Scalar::Text("January 2014"));
        assert_eq!(tokenize("2014-13"), Scalar::Text("2014-13"));
    }

    #[test]
    fn test_represent_round_trip() {
        let m = month(2014, 1);
        assert_eq!(represent(&m), "2014-01");

        for m in [m, month(-5, 3), month(812, 12), month(i32::MAX, 7)] {
            assert_eq!(recognize(&represent(&m)), Some(m));
        }
    }

    #[test]
    fn test_untyped_document() {
        let mut doc = json!({
            "billing": "2014-01",
            "label": "January 2014",
            "history": ["2013-11", "2013-12", "n/a"],
            "count": 3,
        });

        assert_eq!(normalize(&mut doc), 3);

        let billing: Month = serde_json::from_value(doc["billing"].clone()).unwrap();
        assert_eq!(billing, month(2014, 1));

        let history: Vec<Option<Month>> = doc["history"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().and_then(recognize))
            .collect();
        assert_eq!(history, vec![Some(month(2013, 11)), Some(month(2013, 12)), None]);
    }

    #[test]
    fn test_typed_field_without_tag() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Invoice {
            period: Month,
            total:  u32,
        }

        let invoice = Invoice {
            period: month(2014, 1),
            total:  120,
        };
        let json = serde_json::to_string(&invoice).unwrap();
        assert_eq!(json, r#"{"period":"2014-01","total":120}"#);

        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, invoice);
    }
}
