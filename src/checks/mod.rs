//! The assertion helpers, grouped by the kind of object they inspect.
//!
//! Every check takes the reporter for the running test case as its first
//! argument and reports exactly one outcome through it, unless it returns an
//! [`Error`](crate::Error).

pub mod annotations;
pub mod deployments;
pub mod namespaces;
pub mod rbac;

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::serde_json::{self, Value};
use tracing::{debug, error};

use crate::error::{Error, Result};

static NO_ANNOTATIONS: BTreeMap<String, String> = BTreeMap::new();

/// The annotations of an object, or an empty map if it has none
#[must_use]
pub fn annotations_of(meta: &ObjectMeta) -> &BTreeMap<String, String> {
    meta.annotations.as_ref().unwrap_or(&NO_ANNOTATIONS)
}

/// Whether the object was created strictly before `now`.
///
/// Objects without a creation timestamp were never persisted by the API
/// server and count as not created.
///
/// # Errors
///
/// Will return `Err` if the timestamp cannot be decoded
pub fn created_before(meta: &ObjectMeta, now: DateTime<Utc>) -> Result<bool> {
    // Intentionally stricter than comparing a zero-valued time, which reads a
    // missing timestamp as the epoch and so as created
    let Some(timestamp) = meta.creation_timestamp.as_ref() else {
        return Ok(false);
    };

    // Decoded through the RFC 3339 wire form, independent of the inner time type
    let created = match serde_json::to_value(timestamp)? {
        Value::String(raw) => DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| Error::InvalidTimestamp(format!("{raw}: {e}")))?
            .with_timezone(&Utc),
        other => return Err(Error::InvalidTimestamp(other.to_string())),
    };

    Ok(created < now)
}

/// Turn a collaborator result into the fatal error path
pub(crate) fn fetched<T>(result: kube::Result<T>, what: impl Display) -> Result<T> {
    match result {
        Ok(object) => {
            debug!("fetched {}", what);
            Ok(object)
        }
        Err(e) => {
            error!("failed to fetch {}: {}", what, e);
            Err(e.into())
        }
    }
}
