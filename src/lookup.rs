//! Defaulting accessors over loosely-typed API records.
//!
//! API-Football omits fields freely, so every parser in the crate walks
//! nested objects through these helpers instead of indexing by hand. A
//! missing key, a `null`, or a value of the wrong type at any depth resolves
//! to the supplied default.

use serde_json::Value;

/// Walks `path` through nested objects, returning `None` as soon as a key is
/// absent or `null`.
pub fn get_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    if cur.is_null() { None } else { Some(cur) }
}

/// Integer at `path`, or `default`.
///
/// Whole-valued floats (`12.0`) and numeric strings (`"12"`) are accepted
/// since the provider is not consistent about number encoding. A count with
/// a fractional part (`2.5`) is not a count and falls back to `default`.
pub fn get_or_default_i64(root: &Value, path: &[&str], default: i64) -> i64 {
    let Some(v) = get_path(root, path) else {
        return default;
    };
    if let Some(n) = v.as_i64() {
        return n;
    }
    if let Some(f) = v.as_f64() {
        if f.is_finite() && f.fract() == 0.0 {
            return f as i64;
        }
        log::debug!("non-integer count {f} at {}, using {default}", path.join("."));
        return default;
    }
    v.as_str()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

pub fn get_or_default_str<'a>(root: &'a Value, path: &[&str], default: &'a str) -> &'a str {
    get_path(root, path)
        .and_then(|v| v.as_str())
        .unwrap_or(default)
}

/// Unsigned id at `path`. Unlike the `get_or_default_*` helpers there is no
/// sensible default for an identifier, so callers skip the record instead.
pub fn get_id(root: &Value, path: &[&str]) -> Option<u32> {
    let v = get_path(root, path)?;
    v.as_u64()
        .or_else(|| v.as_str().and_then(|s| s.trim().parse::<u64>().ok()))
        .and_then(|n| u32::try_from(n).ok())
}
