//! Defaulting accessors over loosely-typed upstream JSON.
//!
//! Every parser reads upstream payloads through [`Fields`]. Lookups never
//! fail: a missing key, a `null`, a container of the wrong type or an
//! unparseable scalar all resolve to the caller's default.

use serde_json::Value;

/// Path-based, default-producing access into a nested JSON value.
///
/// A path is a sequence of object keys. A segment that parses as an index
/// walks into arrays, so `&["competitions", "0", "status"]` works on the
/// ESPN scoreboard shape.
pub trait Fields {
    /// Value at `path`, or `None` when any step is missing or `null`.
    fn at(&self, path: &[&str]) -> Option<&Value>;

    /// String at `path`. Numbers and booleans are stringified.
    fn str_or(&self, path: &[&str], default: &str) -> String;

    /// Integer at `path`. Floats are truncated and numeric strings parsed;
    /// empty strings, `null` and unparseable values yield `default`.
    fn int_or(&self, path: &[&str], default: i64) -> i64;

    /// Non-negative integer at `path`; negatives yield `default`.
    fn uint_or(&self, path: &[&str], default: u32) -> u32;

    /// Float at `path`, accepting numeric strings.
    fn float_or(&self, path: &[&str], default: f64) -> f64;

    /// Boolean at `path`, accepting `"true"` / `"false"` strings.
    fn bool_or(&self, path: &[&str], default: bool) -> bool;

    /// Array at `path`, or an empty slice.
    fn list(&self, path: &[&str]) -> &[Value];

    /// Value at `path` unless it is `null`, an empty object, an empty array
    /// or an empty string. Used to decide whether an optional section exists.
    fn section(&self, path: &[&str]) -> Option<&Value>;
}

impl Fields for Value {
    fn at(&self, path: &[&str]) -> Option<&Value> {
        let mut current = self;
        for segment in path {
            current = match current {
                Value::Object(map) => map.get(*segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        if current.is_null() { None } else { Some(current) }
    }

    fn str_or(&self, path: &[&str], default: &str) -> String {
        match self.at(path) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    fn int_or(&self, path: &[&str], default: i64) -> i64 {
        self.at(path).and_then(coerce_int).unwrap_or(default)
    }

    fn uint_or(&self, path: &[&str], default: u32) -> u32 {
        self.at(path)
            .and_then(coerce_int)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(default)
    }

    fn float_or(&self, path: &[&str], default: f64) -> f64 {
        self.at(path).and_then(coerce_float).unwrap_or(default)
    }

    fn bool_or(&self, path: &[&str], default: bool) -> bool {
        match self.at(path) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    fn list(&self, path: &[&str]) -> &[Value] {
        match self.at(path) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    fn section(&self, path: &[&str]) -> Option<&Value> {
        self.at(path).filter(|value| match value {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
        }
        _ => None,
    }
}

fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// First element of `items` whose string field `key` equals `wanted`.
pub fn find_by<'a>(items: &'a [Value], key: &str, wanted: &str) -> Option<&'a Value> {
    items
        .iter()
        .find(|item| item.at(&[key]).and_then(Value::as_str) == Some(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_at_walks_objects_and_arrays() {
        let value = json!({"competitions": [{"status": {"type": {"state": "in"}}}]});
        assert_eq!(
            value
                .at(&["competitions", "0", "status", "type", "state"])
                .and_then(Value::as_str),
            Some("in")
        );
        assert!(value.at(&["competitions", "1", "status"]).is_none());
        assert!(value.at(&["competitions", "x"]).is_none());
        assert!(value.at(&["missing", "deeper"]).is_none());
    }

    #[test]
    fn test_null_counts_as_absent() {
        let value = json!({"odds": null});
        assert!(value.at(&["odds"]).is_none());
        assert_eq!(value.str_or(&["odds"], "none"), "none");
    }

    #[test]
    fn test_wrong_container_type_yields_default() {
        let value = json!({"team": "not-an-object", "items": {"a": 1}});
        assert_eq!(value.str_or(&["team", "name"], ""), "");
        assert!(value.list(&["items"]).is_empty());
        assert!(json!(null).list(&["anything"]).is_empty());
    }

    #[test]
    fn test_str_or_stringifies_scalars() {
        let value = json!({"id": 401547, "flag": true, "name": "Chiefs", "list": [1]});
        assert_eq!(value.str_or(&["id"], ""), "401547");
        assert_eq!(value.str_or(&["flag"], ""), "true");
        assert_eq!(value.str_or(&["name"], ""), "Chiefs");
        assert_eq!(value.str_or(&["list"], "fallback"), "fallback");
    }

    #[test]
    fn test_score_coercion_cases() {
        let value = json!({
            "null": null,
            "empty": "",
            "string": "7",
            "number": 7,
            "garbage": "abc",
            "float": 7.9,
            "float_string": "21.0",
            "negative": -3,
        });
        assert_eq!(value.uint_or(&["absent"], 0), 0);
        assert_eq!(value.uint_or(&["null"], 0), 0);
        assert_eq!(value.uint_or(&["empty"], 0), 0);
        assert_eq!(value.uint_or(&["string"], 0), 7);
        assert_eq!(value.uint_or(&["number"], 0), 7);
        assert_eq!(value.uint_or(&["garbage"], 0), 0);
        assert_eq!(value.uint_or(&["float"], 0), 7);
        assert_eq!(value.uint_or(&["float_string"], 0), 21);
        assert_eq!(value.uint_or(&["negative"], 0), 0);
        assert_eq!(value.int_or(&["negative"], 0), -3);
    }

    #[test]
    fn test_float_and_bool_coercion() {
        let value = json!({
            "spread": "-3.5",
            "over_under": 47.5,
            "bad": "n/a",
            "indoor": "TRUE",
            "grass": false,
            "odd": "maybe"
        });
        assert_eq!(value.float_or(&["spread"], 0.0), -3.5);
        assert_eq!(value.float_or(&["over_under"], 0.0), 47.5);
        assert_eq!(value.float_or(&["bad"], 1.5), 1.5);
        assert!(value.bool_or(&["indoor"], false));
        assert!(!value.bool_or(&["grass"], true));
        assert!(value.bool_or(&["odd"], true));
    }

    #[test]
    fn test_section_filters_empty_containers() {
        let value = json!({
            "weather": {},
            "odds": [],
            "situation": {"down": 1},
            "note": "",
            "attendance": 0
        });
        assert!(value.section(&["weather"]).is_none());
        assert!(value.section(&["odds"]).is_none());
        assert!(value.section(&["note"]).is_none());
        assert!(value.section(&["situation"]).is_some());
        assert!(value.section(&["attendance"]).is_some());
    }

    #[test]
    fn test_find_by() {
        let competitors = json!([
            {"homeAway": "away", "id": "1"},
            {"homeAway": "home", "id": "2"}
        ]);
        let items = competitors.as_array().unwrap();
        assert_eq!(
            find_by(items, "homeAway", "home").map(|c| c.str_or(&["id"], "")),
            Some("2".to_string())
        );
        assert!(find_by(items, "homeAway", "neutral").is_none());
    }
}
