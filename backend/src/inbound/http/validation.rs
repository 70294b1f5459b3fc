//! Shared validation helpers for inbound HTTP adapters.
//!
//! Boundary rule: validation failures are detected here and returned
//! immediately, before any store round-trip.

use pagination::PageNumber;
use serde_json::json;

use crate::domain::{Error, HeroId};

/// Error for a request body field that must be present.
pub(crate) fn missing_field_error(field: &str) -> Error {
    Error::invalid_request(format!("`{field}` is required")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Parse the optional `page` query parameter.
///
/// A missing parameter normalizes to the first page; a present but
/// non-positive or non-numeric value is rejected, never clamped.
pub(crate) fn parse_page(raw: Option<&str>) -> Result<PageNumber, Error> {
    match raw {
        None => Ok(PageNumber::FIRST),
        Some(value) => value.parse().map_err(|_| {
            Error::invalid_request("page number must be a positive integer").with_details(json!({
                "field": "page",
                "value": value,
                "code": "invalid_page",
            }))
        }),
    }
}

/// Parse a hero id path segment.
pub(crate) fn parse_hero_id(raw: &str) -> Result<HeroId, Error> {
    HeroId::new(raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "id",
            "code": "invalid_hero_id",
        }))
    })
}
