use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::keys;

/// Variant identity of a [`DomainError`]
///
/// Status mapping dispatches on the tag, never on message content. The six
/// built-in tags cover the closed taxonomy; `Custom` identifies app-defined
/// variants by their stable wire code (e.g. `EMAIL_ALREADY_EXISTS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorTag {
    /// Missing resource
    NotFound,
    /// State conflict
    Conflict,
    /// Malformed input, may carry field-level messages
    Validation,
    /// Missing or invalid credentials
    Unauthorized,
    /// Authenticated but not allowed
    Forbidden,
    /// Unclassified business-rule violation
    Domain,
    /// App-defined variant, keyed by its stable wire code
    Custom(&'static str),
}

/// An expected business failure
///
/// Inert value object: a human message, a stable machine-readable code fixed
/// at construction, and optional structured metadata. Carries no behavior
/// beyond data; the HTTP layer owns the translation to status codes.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct DomainError {
    tag: ErrorTag,
    code: Cow<'static, str>,
    message: String,
    metadata: BTreeMap<String, Value>,
}

impl DomainError {
    fn new(tag: ErrorTag, code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            tag,
            code: code.into(),
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Missing resource, wire code `NOT_FOUND`
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::NotFound, "NOT_FOUND", message)
    }

    /// State conflict, wire code `CONFLICT`
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::Conflict, "CONFLICT", message)
    }

    /// Malformed input, wire code `VALIDATION_ERROR`
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::Validation, "VALIDATION_ERROR", message)
    }

    /// Missing or invalid credentials, wire code `UNAUTHORIZED`
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::Unauthorized, "UNAUTHORIZED", message)
    }

    /// Authenticated but not allowed, wire code `FORBIDDEN`
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::Forbidden, "FORBIDDEN", message)
    }

    /// Generic business-rule violation, wire code `BUSINESS_ERROR`
    pub fn business(message: impl Into<String>) -> Self {
        Self::new(ErrorTag::Domain, "BUSINESS_ERROR", message)
    }

    /// Generic business-rule violation with a caller-chosen wire code
    ///
    /// The tag stays [`ErrorTag::Domain`], so status mapping treats it like
    /// any other generic violation regardless of the code.
    pub fn business_with_code(message: impl Into<String>, code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorTag::Domain, code, message)
    }

    /// App-defined variant identified by its stable wire code
    ///
    /// The code doubles as the variant identity
    /// ([`ErrorTag::Custom`]), so it can be given its own status mapping.
    pub fn custom(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorTag::Custom(code), code, message)
    }

    /// Attach a metadata entry
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach field-level validation messages under the reserved
    /// [`keys::VALIDATION_ERRORS`] metadata key
    #[must_use]
    pub fn with_field_errors(mut self, fields: BTreeMap<String, Vec<String>>) -> Self {
        let fields: serde_json::Map<String, Value> =
            fields.into_iter().map(|(field, messages)| (field, Value::from(messages))).collect();
        self.metadata.insert(keys::VALIDATION_ERRORS.to_owned(), Value::Object(fields));
        self
    }

    /// Variant identity used for status dispatch
    pub const fn tag(&self) -> ErrorTag {
        self.tag
    }

    /// Stable machine-readable wire code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured metadata attached at construction
    pub const fn metadata(&self) -> &BTreeMap<String, Value> {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_variants_fix_their_codes() {
        assert_eq!(DomainError::not_found("x").code(), "NOT_FOUND");
        assert_eq!(DomainError::conflict("x").code(), "CONFLICT");
        assert_eq!(DomainError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(DomainError::unauthorized("x").code(), "UNAUTHORIZED");
        assert_eq!(DomainError::forbidden("x").code(), "FORBIDDEN");
        assert_eq!(DomainError::business("x").code(), "BUSINESS_ERROR");
    }

    #[test]
    fn custom_code_is_the_variant_identity() {
        let error = DomainError::custom("EMAIL_ALREADY_EXISTS", "email taken");
        assert_eq!(error.tag(), ErrorTag::Custom("EMAIL_ALREADY_EXISTS"));
        assert_eq!(error.code(), "EMAIL_ALREADY_EXISTS");
    }

    #[test]
    fn business_code_override_keeps_domain_tag() {
        let error = DomainError::business_with_code("quota exceeded", "QUOTA_EXCEEDED");
        assert_eq!(error.tag(), ErrorTag::Domain);
        assert_eq!(error.code(), "QUOTA_EXCEEDED");
    }

    #[test]
    fn metadata_entries_accumulate() {
        let error = DomainError::conflict("email taken")
            .with_metadata("email", "a@x.com")
            .with_metadata("attempt", 2);
        assert_eq!(error.metadata().len(), 2);
        assert_eq!(error.metadata()["email"], "a@x.com");
    }

    #[test]
    fn field_errors_land_under_the_reserved_key() {
        let mut fields = BTreeMap::new();
        fields.insert("email".to_owned(), vec!["required".to_owned()]);
        let error = DomainError::validation("invalid user").with_field_errors(fields);

        let stored = &error.metadata()[keys::VALIDATION_ERRORS];
        assert_eq!(stored["email"][0], "required");
    }

    #[test]
    fn display_is_the_message() {
        assert_eq!(DomainError::not_found("User not found").to_string(), "User not found");
    }
}
