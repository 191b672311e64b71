use std::collections::BTreeMap;

use regex::Regex;

use crate::error::{Error, Result};
use crate::report::Reporter;

/// Report whether annotation `name` holds exactly `expected_value`.
///
/// A missing annotation is compared as the empty string.
pub fn annotations_equal(
    t: &dyn Reporter,
    annotations: &BTreeMap<String, String>,
    name: &str,
    expected_value: &str,
) {
    let value = annotation_value(annotations, name);

    if value == expected_value {
        t.log_success(&format!(
            "Annotation {name} exists with its expected value.  Expected {expected_value}, got {value}."
        ));
    } else {
        t.log_failure(&format!(
            "Annotation {name} does not exist with its expected value.  Expected {expected_value}, got {value}."
        ));
    }
}

/// Report whether annotation `name` matches `expected_pattern` anywhere in
/// its value.
///
/// A missing annotation is matched as the empty string.
///
/// # Errors
///
/// Will return `Err` without reporting if `expected_pattern` is not a valid
/// regular expression
pub fn annotations_match_pattern(
    t: &dyn Reporter,
    annotations: &BTreeMap<String, String>,
    name: &str,
    expected_pattern: &str,
) -> Result<()> {
    let value = annotation_value(annotations, name);
    let pattern = Regex::new(expected_pattern).map_err(|source| Error::InvalidPattern {
        pattern: expected_pattern.to_string(),
        source,
    })?;

    if pattern.is_match(value) {
        t.log_success(&format!(
            "Annotation {name} exists and matches its expected pattern.  Expected {expected_pattern}, got {value}."
        ));
    } else {
        t.log_failure(&format!(
            "Annotation {name} does not exist and match its expected pattern.  Expected {expected_pattern}, got {value}."
        ));
    }

    Ok(())
}

fn annotation_value<'a>(annotations: &'a BTreeMap<String, String>, name: &str) -> &'a str {
    annotations.get(name).map_or("", String::as_str)
}
