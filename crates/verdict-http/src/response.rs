use http::StatusCode;
use serde_json::Value;

use crate::problem::ProblemBody;

/// Target of a `Location` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Literal URI, emitted as-is
    Uri(String),
    /// Named route resolved by the host's [`crate::RouteResolver`]
    Action {
        /// Route name as registered with the host
        name: String,
        /// Route parameters, usually a JSON object
        params: Option<Value>,
    },
}

/// Response payload
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body at all
    Empty,
    /// Serialized success value
    Json(Value),
    /// Mapped failure
    Problem(ProblemBody),
}

/// Transport-agnostic description of the response to emit
///
/// Produced by [`crate::ResultMapper::build`]; the host HTTP layer turns it
/// into a real response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    pub status: StatusCode,
    pub location: Option<Location>,
    pub body: ResponseBody,
}

impl ResponseSpec {
    /// Response with a status and no body
    pub const fn empty(status: StatusCode) -> Self {
        Self { status, location: None, body: ResponseBody::Empty }
    }

    /// Response carrying a serialized success value
    pub const fn json(status: StatusCode, value: Value) -> Self {
        Self { status, location: None, body: ResponseBody::Json(value) }
    }

    /// Response carrying a problem body
    pub const fn problem(status: StatusCode, body: ProblemBody) -> Self {
        Self { status, location: None, body: ResponseBody::Problem(body) }
    }

    /// Attach a `Location` target
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}
