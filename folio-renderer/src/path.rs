//! Dotted-path resolution against a JSON context.

use serde_json::Value;

/// Result of resolving a dotted path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'v> {
    Found(&'v Value),
    Missing,
}

impl<'v> Lookup<'v> {
    pub fn value(self) -> Option<&'v Value> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Conditional truthiness.
    ///
    /// Only a missing value, `null`, `""` and `false` are falsy. Zero, empty
    /// sequences and empty mappings are truthy.
    pub fn is_truthy(self) -> bool {
        match self {
            Lookup::Missing | Lookup::Found(Value::Null) => false,
            Lookup::Found(Value::String(s)) => !s.is_empty(),
            Lookup::Found(Value::Bool(b)) => *b,
            Lookup::Found(_) => true,
        }
    }
}

/// Resolve `path` against `ctx`, descending one mapping key per segment.
///
/// `.` (or a blank path) is the context itself. A path with any other empty
/// segment (`a..b`, `.a`, `a.`) never resolves.
pub fn resolve<'v>(ctx: &'v Value, path: &str) -> Lookup<'v> {
    let path = path.trim();
    if path.is_empty() || path == "." {
        return Lookup::Found(ctx);
    }

    let mut current = ctx;
    for segment in path.split('.') {
        if segment.is_empty() {
            return Lookup::Missing;
        }
        match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => current = next,
                None => return Lookup::Missing,
            },
            _ => return Lookup::Missing,
        }
    }
    Lookup::Found(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_keys() {
        let data = json!({ "a": { "b": { "c": 3 } } });
        assert_eq!(resolve(&data, "a.b.c"), Lookup::Found(&json!(3)));
        assert_eq!(resolve(&data, " a.b "), Lookup::Found(&json!({ "c": 3 })));
    }

    #[test]
    fn missing_key_is_missing() {
        let data = json!({ "a": { "b": 1 } });
        assert_eq!(resolve(&data, "a.x"), Lookup::Missing);
        assert_eq!(resolve(&data, "x"), Lookup::Missing);
    }

    #[test]
    fn scalars_and_sequences_are_not_descended() {
        let data = json!({ "n": 1, "list": [{ "k": 1 }] });
        assert_eq!(resolve(&data, "n.k"), Lookup::Missing);
        assert_eq!(resolve(&data, "list.0"), Lookup::Missing);
    }

    #[test]
    fn dot_is_current_context() {
        let item = json!("rust");
        assert_eq!(resolve(&item, "."), Lookup::Found(&item));
        assert_eq!(resolve(&item, ""), Lookup::Found(&item));
    }

    #[test]
    fn empty_segments_never_resolve() {
        let data = json!({ "a": { "b": 1 } });
        assert_eq!(resolve(&data, "a..b"), Lookup::Missing);
        assert_eq!(resolve(&data, ".a"), Lookup::Missing);
        assert_eq!(resolve(&data, "a."), Lookup::Missing);
    }

    #[test]
    fn null_is_found_not_missing() {
        let data = json!({ "x": null });
        assert!(resolve(&data, "x").is_found());
        assert!(!resolve(&data, "x").is_truthy());
    }

    #[test]
    fn truthiness_is_narrow() {
        let data = json!({
            "zero": 0, "empty_list": [], "empty_map": {}, "text": "t",
            "blank": "", "no": false, "yes": true
        });
        assert!(resolve(&data, "zero").is_truthy());
        assert!(resolve(&data, "empty_list").is_truthy());
        assert!(resolve(&data, "empty_map").is_truthy());
        assert!(resolve(&data, "text").is_truthy());
        assert!(resolve(&data, "yes").is_truthy());
        assert!(!resolve(&data, "blank").is_truthy());
        assert!(!resolve(&data, "no").is_truthy());
        assert!(!resolve(&data, "absent").is_truthy());
    }
}
