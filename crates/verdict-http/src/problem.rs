use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use verdict_domain::{DomainError, keys};

use crate::catalog::error_type_info;

/// Wire code emitted when an error carries no code of its own
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// RFC 7807-style problem body emitted on every mapped failure
///
/// `errors` and `metadata` are omitted from the serialized form entirely
/// when absent, never emitted as `null` or empty objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemBody {
    pub title: String,
    pub code: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
    #[serde(rename = "type")]
    pub type_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

/// Render a problem body for an error at a given status
///
/// Pure transformation: catalog metadata for the status, the error's message
/// as `detail` (catalog default when empty), the error's wire code, and the
/// request path as `instance`. A well-formed field→messages map under the
/// reserved [`keys::VALIDATION_ERRORS`] metadata entry is promoted into
/// `errors` and removed from the copied metadata, so the same data never
/// appears twice.
pub fn problem_for(error: &DomainError, status: StatusCode, request_path: &str) -> ProblemBody {
    let info = error_type_info(status);

    let detail = if error.message().is_empty() {
        info.detail.to_owned()
    } else {
        error.message().to_owned()
    };

    let code = if error.code().is_empty() {
        UNKNOWN_ERROR.to_owned()
    } else {
        error.code().to_owned()
    };

    let mut metadata = error.metadata().clone();
    let errors = metadata
        .get(keys::VALIDATION_ERRORS)
        .and_then(|value| serde_json::from_value::<BTreeMap<String, Vec<String>>>(value.clone()).ok());
    if errors.is_some() {
        metadata.remove(keys::VALIDATION_ERRORS);
    }

    ProblemBody {
        title: info.title.to_owned(),
        code,
        status: status.as_u16(),
        detail,
        instance: request_path.to_owned(),
        type_uri: info.type_uri.to_owned(),
        errors,
        metadata: if metadata.is_empty() { None } else { Some(metadata) },
    }
}
