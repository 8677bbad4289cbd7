//! Alias resolution over raw report JSON.
//!
//! Each helper walks a fixed list of field names and returns the first one
//! that is present, non-null and of the expected JSON type. Lists must also
//! be non-empty to count. Nothing here fails; callers pick the default.

use serde_json::Value;

pub fn first_str<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_str))
}

pub fn first_f64(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_f64))
}

pub fn first_bool(obj: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_bool))
}

pub fn first_list<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a [Value]> {
    keys.iter().find_map(|k| {
        obj.get(*k)
            .and_then(Value::as_array)
            .filter(|a| !a.is_empty())
            .map(Vec::as_slice)
    })
}

/// Array under `key`, or an empty slice.
pub fn list<'a>(obj: &'a Value, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn f64_or_zero(obj: &Value, key: &str) -> f64 {
    obj.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Buff ids are written as `b<digits>` keys in `buffMap`.
pub fn parse_buff_key(key: &str) -> Option<u64> {
    let digits = key.strip_prefix('b')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn skips_null_and_wrong_type() {
        let v = json!({"a": null, "b": "text", "c": 4.5});
        assert_eq!(first_f64(&v, &["a", "b", "c"]), Some(4.5));
        assert_eq!(first_str(&v, &["a", "c", "b"]), Some("text"));
        assert_eq!(first_f64(&v, &["missing"]), None);
    }

    #[test]
    fn zero_is_a_present_value() {
        let v = json!({"dps": 0, "Dps": 12});
        assert_eq!(first_f64(&v, &["dps", "Dps"]), Some(0.0));
    }

    #[test]
    fn empty_lists_fall_through() {
        let v = json!({"dpsAll": [], "dpsTargets": [[{"damage": 1}]]});
        let got = first_list(&v, &["dpsAll", "dpsTargets"]).map(|l| l.len());
        assert_eq!(got, Some(1));
    }

    #[test]
    fn buff_keys() {
        assert_eq!(parse_buff_key("b740"), Some(740));
        assert_eq!(parse_buff_key("b"), None);
        assert_eq!(parse_buff_key("s740"), None);
        assert_eq!(parse_buff_key("b74x"), None);
    }
}
