//! The user record and its identifier.
//!
//! [`User`] holds exactly the JSON a client posted, so a created record
//! echoes back verbatim: unknown fields, explicit `null`s and values of an
//! unexpected type all survive. Typed access goes through accessors that
//! return `None` when a field is absent or has another type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Caller-supplied user identifier.
///
/// Uniqueness is declared but never enforced: two records may share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    /// Parses a path segment the way a lenient integer parse does.
    ///
    /// Leading whitespace and a single sign are accepted, then the longest
    /// run of ASCII digits is taken and anything after it is ignored, so
    /// `"12abc"` yields `12`. Returns `None` when there are no leading digits
    /// or the value does not fit in an `i64`; callers treat `None` as an id
    /// that matches no record.
    pub fn parse_lenient(segment: &str) -> Option<UserId> {
        let trimmed = segment.trim_start();
        let sign_len = match trimmed.as_bytes().first() {
            Some(b'+') | Some(b'-') => 1,
            _ => 0,
        };
        let digit_len = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digit_len == 0 {
            return None;
        }

        trimmed[..sign_len + digit_len].parse().ok().map(UserId)
    }

    /// Reads an id out of a JSON value.
    ///
    /// Only numbers count. A float with no fractional part (`1.0`) is the
    /// same id as the integer; strings such as `"1"` are never ids.
    pub fn from_json(value: &Value) -> Option<UserId> {
        let Value::Number(n) = value else {
            return None;
        };
        if let Some(i) = n.as_i64() {
            return Some(UserId(i));
        }
        let f = n.as_f64()?;
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(UserId(f as i64))
        } else {
            None
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user record as stored and served.
///
/// Documented shape is `{id, name, email}`, but nothing is enforced: the
/// record is whatever JSON value was posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Value);

impl User {
    /// Builds a fully-populated record.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        User(json!({
            "id": id,
            "name": name.into(),
            "email": email.into(),
        }))
    }

    /// Wraps a posted JSON value unchanged.
    pub fn from_value(value: Value) -> Self {
        User(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Raw field lookup; `None` for absent keys and non-object records.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn id(&self) -> Option<UserId> {
        self.field("id").and_then(UserId::from_json)
    }

    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.field("email").and_then(Value::as_str)
    }

    /// True when this record carries exactly `id`.
    pub fn has_id(&self, id: UserId) -> bool {
        self.id() == Some(id)
    }

    /// Sets `key` to `value`, or removes it when `value` is `None`.
    ///
    /// No-op on records that are not JSON objects.
    pub fn set_field(&mut self, key: &str, value: Option<Value>) {
        if let Value::Object(map) = &mut self.0 {
            match value {
                Some(v) => {
                    map.insert(key.to_string(), v);
                }
                None => {
                    map.remove(key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_lenient_accepts_plain_and_signed_integers() {
        assert_eq!(UserId::parse_lenient("42"), Some(UserId(42)));
        assert_eq!(UserId::parse_lenient("-7"), Some(UserId(-7)));
        assert_eq!(UserId::parse_lenient("+3"), Some(UserId(3)));
        assert_eq!(UserId::parse_lenient("  5"), Some(UserId(5)));
    }

    #[test]
    fn parse_lenient_stops_at_first_non_digit() {
        assert_eq!(UserId::parse_lenient("12abc"), Some(UserId(12)));
        assert_eq!(UserId::parse_lenient("4.9"), Some(UserId(4)));
    }

    #[test]
    fn parse_lenient_rejects_non_numeric_input() {
        assert_eq!(UserId::parse_lenient("abc"), None);
        assert_eq!(UserId::parse_lenient(""), None);
        assert_eq!(UserId::parse_lenient("-"), None);
        assert_eq!(UserId::parse_lenient("x12"), None);
        assert_eq!(UserId::parse_lenient("99999999999999999999"), None);
    }

    #[test]
    fn from_json_accepts_integral_numbers_only() {
        assert_eq!(UserId::from_json(&json!(4)), Some(UserId(4)));
        assert_eq!(UserId::from_json(&json!(1.0)), Some(UserId(1)));
        assert_eq!(UserId::from_json(&json!(1.5)), None);
        assert_eq!(UserId::from_json(&json!("4")), None);
        assert_eq!(UserId::from_json(&Value::Null), None);
        assert_eq!(UserId::from_json(&json!(u64::MAX)), None);
    }

    #[test]
    fn user_round_trips_nulls_and_mistyped_fields() {
        let body = json!({ "id": null, "name": 5, "email": null, "role": "admin" });
        let user: User = serde_json::from_value(body.clone()).unwrap();

        assert_eq!(user.id(), None);
        assert_eq!(user.name(), None);
        assert_eq!(user.field("name"), Some(&json!(5)));
        assert_eq!(serde_json::to_value(&user).unwrap(), body);
    }

    #[test]
    fn non_object_records_have_no_fields() {
        let mut user = User::from_value(json!([1, 2, 3]));
        assert_eq!(user.id(), None);
        user.set_field("name", Some(json!("x")));
        assert_eq!(user.as_value(), &json!([1, 2, 3]));
    }

    #[test]
    fn set_field_inserts_and_removes() {
        let mut user = User::new(1, "a", "a@example.com");
        user.set_field("name", Some(json!("b")));
        user.set_field("email", None);
        assert_eq!(user.into_value(), json!({ "id": 1, "name": "b" }));
    }

    proptest! {
        #[test]
        fn parse_lenient_matches_std_for_any_i64(n in any::<i64>()) {
            prop_assert_eq!(UserId::parse_lenient(&n.to_string()), Some(UserId(n)));
        }

        #[test]
        fn parse_lenient_ignores_alphabetic_suffix(n in 0i64..1_000_000, suffix in "[a-z]{1,8}") {
            let segment = format!("{}{}", n, suffix);
            prop_assert_eq!(UserId::parse_lenient(&segment), Some(UserId(n)));
        }
    }
}
