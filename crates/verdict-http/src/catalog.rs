use http::StatusCode;

/// RFC 7807 problem metadata for one status code
#[derive(Debug, PartialEq, Eq)]
pub struct ErrorTypeInfo {
    /// Short human-facing summary
    pub title: &'static str,
    /// URI identifying the problem type
    pub type_uri: &'static str,
    /// Default detail text when the error carries no message
    pub detail: &'static str,
}

const BAD_REQUEST: ErrorTypeInfo = ErrorTypeInfo {
    title: "Bad Request",
    type_uri: "https://tools.ietf.org/html/rfc7231#section-6.5.1",
    detail: "The request could not be understood by the server due to malformed syntax.",
};

const UNAUTHORIZED: ErrorTypeInfo = ErrorTypeInfo {
    title: "Unauthorized",
    type_uri: "https://tools.ietf.org/html/rfc7235#section-3.1",
    detail: "The request requires user authentication.",
};

const FORBIDDEN: ErrorTypeInfo = ErrorTypeInfo {
    title: "Forbidden",
    type_uri: "https://tools.ietf.org/html/rfc7231#section-6.5.3",
    detail: "The server understood the request, but is refusing to fulfill it.",
};

const NOT_FOUND: ErrorTypeInfo = ErrorTypeInfo {
    title: "Resource Not Found",
    type_uri: "https://tools.ietf.org/html/rfc7231#section-6.5.4",
    detail: "The requested resource could not be found on the server.",
};

const CONFLICT: ErrorTypeInfo = ErrorTypeInfo {
    title: "Conflict",
    type_uri: "https://tools.ietf.org/html/rfc4918#section-11.5",
    detail: "The request could not be completed due to a conflict with the current state of the resource.",
};

const UNPROCESSABLE: ErrorTypeInfo = ErrorTypeInfo {
    title: "Business Rule Violation",
    type_uri: "https://tools.ietf.org/html/rfc4918#section-11.2",
    detail: "The request was well-formed but unable to be processed due to business logic constraints.",
};

const INTERNAL: ErrorTypeInfo = ErrorTypeInfo {
    title: "Internal Server Error",
    type_uri: "https://tools.ietf.org/html/rfc7231#section-6.6.1",
    detail: "The server encountered an unexpected condition that prevented it from fulfilling the request.",
};

const DEFAULT: ErrorTypeInfo = ErrorTypeInfo {
    title: "An error occurred",
    type_uri: "https://tools.ietf.org/html/rfc2616#section-10",
    detail: "An unexpected error occurred while processing the request.",
};

/// Problem metadata for a status code
///
/// Total over all status codes: unknown codes get the generic default entry.
/// The table is compiled in and never mutated, so lookups are safe from any
/// number of concurrent callers.
pub fn error_type_info(status: StatusCode) -> &'static ErrorTypeInfo {
    match status.as_u16() {
        400 => &BAD_REQUEST,
        401 => &UNAUTHORIZED,
        403 => &FORBIDDEN,
        404 => &NOT_FOUND,
        409 => &CONFLICT,
        422 => &UNPROCESSABLE,
        500 => &INTERNAL,
        _ => &DEFAULT,
    }
}
