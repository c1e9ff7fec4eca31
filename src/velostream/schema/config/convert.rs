//! Conversions between stored property text and typed values
//!
//! All values live in the store as strings. These functions are the only
//! place where text becomes a typed value, and they never coerce: text that
//! does not parse is a `PropertyError::Format`.

use super::error::{PropertyError, PropertyResult};
use super::keys::PropertyType;

/// Parse stored text as a base-10 `i32`
pub fn parse_int(key: &str, raw: &str) -> PropertyResult<i32> {
    raw.parse::<i32>().map_err(|e| {
        log::debug!("Property '{}' is not a valid integer: {}", key, e);
        PropertyError::format(key, raw, PropertyType::Integer, Some(e))
    })
}

/// Parse stored text as a boolean literal, `true` or `false` in any case
pub fn parse_bool(key: &str, raw: &str) -> PropertyResult<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        log::debug!("Property '{}' is not a valid boolean", key);
        Err(PropertyError::format(key, raw, PropertyType::Boolean, None))
    }
}

pub fn format_int(value: i32) -> String {
    value.to_string()
}

pub fn format_bool(value: bool) -> String {
    value.to_string()
}

/// Apply `parse` to an optional stored value, keeping absence as `Ok(None)`
pub fn parse_optional<T>(
    key: &str,
    raw: Option<&str>,
    parse: fn(&str, &str) -> PropertyResult<T>,
) -> PropertyResult<Option<T>> {
    raw.map(|value| parse(key, value)).transpose()
}
