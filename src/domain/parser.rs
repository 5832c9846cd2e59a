//! Parsing of raw numeric input.

use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

static SEPARATOR: OnceLock<Regex> = OnceLock::new();

/// Runs of commas and/or whitespace.
fn separator() -> &'static Regex {
    SEPARATOR.get_or_init(|| Regex::new(r"[,\s]+").expect("separator pattern compiles"))
}

/// Parse raw text into the ordered sequence of integers it contains.
///
/// Fragments are separated by any run of commas and whitespace, so
/// `"7, 3, 9"`, `"7 3 9"` and `"7,3,9"` are equivalent. Order and duplicates
/// are kept exactly as typed.
///
/// # Errors
/// * [`DomainError::EmptyInput`] if `raw` is absent, blank, or holds no fragments.
/// * [`DomainError::MalformedInput`] for the first fragment that is not an
///   `i32`, including values outside the `i32` range.
#[instrument(level = "debug")]
pub fn parse_numbers(raw: Option<&str>) -> DomainResult<Vec<i32>> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DomainError::EmptyInput)?;

    let numbers = separator()
        .split(raw)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            fragment
                .parse::<i32>()
                .map_err(|_| DomainError::MalformedInput {
                    token: fragment.to_string(),
                })
        })
        .collect::<DomainResult<Vec<_>>>()?;

    if numbers.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    debug!("parsed {} numbers", numbers.len());
    Ok(numbers)
}

/// Display text for a parsed sequence, e.g. `[7, 3, 9, 1, 4]`.
pub fn format_numbers(numbers: &[i32]) -> String {
    format!("[{}]", numbers.iter().join(", "))
}
