// Parameter checks shared by the endpoint functions. Both run before any
// request is built.

use crate::error::{Result, WynnError};

/// Returns whichever of the two values is set. Both or neither is an error
/// naming the two fields.
pub fn exactly_one_of<'a>(
    (first_name, first): (&str, Option<&'a str>),
    (second_name, second): (&str, Option<&'a str>),
) -> Result<&'a str> {
    match (first, second) {
        (Some(value), None) | (None, Some(value)) => Ok(value),
        _ => Err(WynnError::InvalidParameters(format!(
            "Either {} or {} is required",
            first_name, second_name
        ))),
    }
}

pub fn required<T>(name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(WynnError::MissingParameter(name))
}

/// Appends the `fullResult` marker when asked to.
pub fn with_full_result(path: String, full_result: bool) -> String {
    if !full_result {
        return path;
    }
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}fullResult", path, separator)
}
