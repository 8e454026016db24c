//! Flattening of one raw listing into a fixed-schema [`OutputRow`].
//!
//! Field rules:
//!
//! | column | source | when absent |
//! |---|---|---|
//! | `publication_date` | first 10 chars of `publication_date` | error |
//! | `job_type` | `type` | `None` |
//! | `job` | `name` | `None` |
//! | `company` | `company.name` | `None` if `company` has no `name`, `"N/A"` if `company` is absent |
//! | `city`, `country` | first `locations[].name`, split on the first comma | both `"N/A"` |
//!
//! JSON `null` is treated the same as an absent key.

use jobsync_core::{OutputRow, NOT_AVAILABLE};
use serde_json::{Map, Value};

use crate::error::DataShapeError;

/// Length of a `YYYY-MM-DD` date prefix.
const DATE_LEN: usize = 10;

/// Flattens one raw listing into an [`OutputRow`].
///
/// # Errors
///
/// - [`DataShapeError::NotAnObject`] if `raw` is not a JSON object.
/// - [`DataShapeError::MissingField`] if `publication_date` is absent or null.
/// - [`DataShapeError::InvalidField`] if `publication_date` is not a string,
///   `company` is not an object, or `locations` is not an array.
pub fn extract_row(raw: &Value) -> Result<OutputRow, DataShapeError> {
    let listing = raw.as_object().ok_or(DataShapeError::NotAnObject {
        found: json_type(raw),
    })?;

    let publication_date = publication_date(listing)?;
    let company = company_name(listing)?;
    let (city, country) = city_and_country(listing)?;

    Ok(OutputRow {
        publication_date,
        job_type: scalar_text(listing.get("type")),
        job: scalar_text(listing.get("name")),
        company,
        city,
        country,
    })
}

fn publication_date(listing: &Map<String, Value>) -> Result<String, DataShapeError> {
    const FIELD: &str = "publication_date";
    match listing.get(FIELD) {
        None | Some(Value::Null) => Err(DataShapeError::MissingField { field: FIELD }),
        // Character-based so a short or non-ASCII value never splits a code point.
        Some(Value::String(raw)) => Ok(raw.chars().take(DATE_LEN).collect()),
        Some(other) => Err(DataShapeError::InvalidField {
            field: FIELD,
            expected: "string",
            found: json_type(other),
        }),
    }
}

fn company_name(listing: &Map<String, Value>) -> Result<Option<String>, DataShapeError> {
    match listing.get("company") {
        None | Some(Value::Null) => Ok(Some(NOT_AVAILABLE.to_owned())),
        Some(Value::Object(company)) => Ok(scalar_text(company.get("name"))),
        Some(other) => Err(DataShapeError::InvalidField {
            field: "company",
            expected: "object",
            found: json_type(other),
        }),
    }
}

fn city_and_country(listing: &Map<String, Value>) -> Result<(String, String), DataShapeError> {
    let first = match listing.get("locations") {
        None | Some(Value::Null) => None,
        Some(Value::Array(locations)) => locations.first(),
        Some(other) => {
            return Err(DataShapeError::InvalidField {
                field: "locations",
                expected: "array",
                found: json_type(other),
            })
        }
    };

    let location = first.and_then(|loc| loc.get("name")).and_then(Value::as_str);

    // Only the first comma splits; both halves are kept untrimmed.
    Ok(match location.and_then(|name| name.split_once(',')) {
        Some((city, country)) => (city.to_owned(), country.to_owned()),
        None => (NOT_AVAILABLE.to_owned(), NOT_AVAILABLE.to_owned()),
    })
}

/// Renders a scalar field verbatim. Strings are taken as-is, other non-null
/// values use their JSON text.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
