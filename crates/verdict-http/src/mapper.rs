use std::collections::HashMap;

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use verdict_domain::{DomainResult, ErrorTag};

use crate::problem::problem_for;
use crate::response::{Location, ResponseBody, ResponseSpec};

/// Capability to derive a location identifier from a success value
///
/// Payloads that can anchor a derived `Location` header expose their
/// identifier here; payloads that cannot return `None` and the mapper falls
/// back to the bare request path. An explicit opt-in, not reflection.
pub trait Identify {
    /// Identifier appended to the request path when deriving a location
    fn identifier(&self) -> Option<String>;
}

/// Type-erased payloads derive their identifier from an `id` field, when one
/// is present and scalar.
impl Identify for Value {
    fn identifier(&self) -> Option<String> {
        match self.get("id") {
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Named-route resolution provided by the host HTTP layer
///
/// Backs [`Location::Action`]: the mapper records the route name and
/// parameters, the host turns them into a URI when rendering the response.
pub trait RouteResolver {
    /// URI for a named route, or `None` when the name is unknown
    fn resolve(&self, name: &str, params: Option<&Value>) -> Option<String>;
}

/// Configured success shape, applied only when the result succeeded
#[derive(Debug)]
enum SuccessShape {
    Ok,
    OkEmpty,
    Created { location: String },
    CreatedAtAction { name: String, params: Option<Value> },
    NoContent,
    Accepted { uri: Option<String>, value: Option<Value> },
}

/// Fluent translator from a [`DomainResult`] to a [`ResponseSpec`]
///
/// One mapper is built per request, configured by chaining, and consumed by
/// [`ResultMapper::build`]. Construction seeds the default error table:
/// NotFound→404, Conflict→409, Validation→400, Unauthorized→401,
/// Forbidden→403 and Domain→422; unregistered tags also fall back to 422 —
/// a domain failure is never inferred to be a server fault.
#[derive(Debug)]
pub struct ResultMapper<T> {
    result: DomainResult<T>,
    request_path: String,
    error_table: HashMap<ErrorTag, StatusCode>,
    success: Option<SuccessShape>,
}

fn default_error_table() -> HashMap<ErrorTag, StatusCode> {
    HashMap::from([
        (ErrorTag::NotFound, StatusCode::NOT_FOUND),
        (ErrorTag::Conflict, StatusCode::CONFLICT),
        (ErrorTag::Validation, StatusCode::BAD_REQUEST),
        (ErrorTag::Unauthorized, StatusCode::UNAUTHORIZED),
        (ErrorTag::Forbidden, StatusCode::FORBIDDEN),
        (ErrorTag::Domain, StatusCode::UNPROCESSABLE_ENTITY),
    ])
}

fn body_from(value: &Value) -> ResponseBody {
    if value.is_null() {
        ResponseBody::Empty
    } else {
        ResponseBody::Json(value.clone())
    }
}

impl<T: Serialize> ResultMapper<T> {
    /// Start mapping a result observed at the given request path
    pub fn new(result: DomainResult<T>, request_path: impl Into<String>) -> Self {
        Self {
            result,
            request_path: request_path.into(),
            error_table: default_error_table(),
            success: None,
        }
    }

    /// 200 with the success value as body, empty when the value serializes
    /// to JSON null
    #[must_use]
    pub fn ok(mut self) -> Self {
        self.success = Some(SuccessShape::Ok);
        self
    }

    /// 200 with no body, regardless of the success value
    #[must_use]
    pub fn ok_empty(mut self) -> Self {
        self.success = Some(SuccessShape::OkEmpty);
        self
    }

    /// 201 with the success value and a `Location` header
    ///
    /// Without an explicit URI the location is derived from the value's
    /// [`Identify::identifier`] appended to the request path; values without
    /// an identifier fall back to the bare request path.
    #[must_use]
    pub fn created(mut self, uri: Option<String>) -> Self
    where
        T: Identify,
    {
        let location = uri.unwrap_or_else(|| self.derive_location());
        self.success = Some(SuccessShape::Created { location });
        self
    }

    /// 201 with the success value, `Location` resolved later by the host's
    /// [`RouteResolver`] from a named route
    #[must_use]
    pub fn created_at_action(mut self, name: impl Into<String>, params: Option<Value>) -> Self {
        self.success = Some(SuccessShape::CreatedAtAction { name: name.into(), params });
        self
    }

    /// 204 with no body
    #[must_use]
    pub fn no_content(mut self) -> Self {
        self.success = Some(SuccessShape::NoContent);
        self
    }

    /// 202 with the given value (the success value when none is given) and a
    /// `Location` header when a URI is supplied
    ///
    /// # Panics
    ///
    /// Panics if the given value cannot be serialized to JSON.
    #[must_use]
    pub fn accepted(mut self, uri: Option<String>, value: Option<T>) -> Self {
        let value = value.map(|v| serde_json::to_value(v).expect("accepted value serializes to JSON"));
        self.success = Some(SuccessShape::Accepted { uri, value });
        self
    }

    /// Map the tagged error variant to 409
    #[must_use]
    pub fn conflict_for(self, tag: ErrorTag) -> Self {
        self.map_error_to_status(tag, StatusCode::CONFLICT)
    }

    /// Map the tagged error variant to 404
    #[must_use]
    pub fn not_found_for(self, tag: ErrorTag) -> Self {
        self.map_error_to_status(tag, StatusCode::NOT_FOUND)
    }

    /// Map the tagged error variant to 400
    #[must_use]
    pub fn bad_request_for(self, tag: ErrorTag) -> Self {
        self.map_error_to_status(tag, StatusCode::BAD_REQUEST)
    }

    /// Map the tagged error variant to 422
    #[must_use]
    pub fn unprocessable_for(self, tag: ErrorTag) -> Self {
        self.map_error_to_status(tag, StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Map the tagged error variant to 401
    #[must_use]
    pub fn unauthorized_for(self, tag: ErrorTag) -> Self {
        self.map_error_to_status(tag, StatusCode::UNAUTHORIZED)
    }

    /// Map the tagged error variant to 403
    #[must_use]
    pub fn forbidden_for(self, tag: ErrorTag) -> Self {
        self.map_error_to_status(tag, StatusCode::FORBIDDEN)
    }

    // Last registration for a tag wins.
    fn map_error_to_status(mut self, tag: ErrorTag, status: StatusCode) -> Self {
        self.error_table.insert(tag, status);
        self
    }

    fn derive_location(&self) -> String
    where
        T: Identify,
    {
        let identifier = self.result.as_ref().ok().and_then(Identify::identifier);
        match identifier {
            Some(id) => format!("{}/{id}", self.request_path),
            None => self.request_path.clone(),
        }
    }

    /// Resolve the configured rules into a response descriptor
    ///
    /// On failure the first error's tag picks the status from the error
    /// table (422 when unregistered) and the problem formatter renders the
    /// body at the request path.
    ///
    /// # Panics
    ///
    /// Panics when the result succeeded but no success shape was configured
    /// (`ok()`, `created()`, `no_content()`, …) — a misconfigured handler,
    /// not a recoverable error. Also panics if the success value cannot be
    /// serialized to JSON.
    pub fn build(self) -> ResponseSpec {
        let Self { result, request_path, error_table, success } = self;

        let value = match result {
            Ok(value) => value,
            Err(failure) => {
                let error = failure.primary();
                let status = error_table
                    .get(&error.tag())
                    .copied()
                    .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY);
                return ResponseSpec::problem(status, problem_for(error, status, &request_path));
            }
        };

        let Some(shape) = success else {
            panic!("you must configure a success response: ok(), created(), no_content(), ...");
        };
        let value = serde_json::to_value(value).expect("success value serializes to JSON");

        match shape {
            SuccessShape::Ok => ResponseSpec { status: StatusCode::OK, location: None, body: body_from(&value) },
            SuccessShape::OkEmpty => ResponseSpec::empty(StatusCode::OK),
            SuccessShape::Created { location } => ResponseSpec {
                status: StatusCode::CREATED,
                location: Some(Location::Uri(location)),
                body: body_from(&value),
            },
            SuccessShape::CreatedAtAction { name, params } => ResponseSpec {
                status: StatusCode::CREATED,
                location: Some(Location::Action { name, params }),
                body: body_from(&value),
            },
            SuccessShape::NoContent => ResponseSpec::empty(StatusCode::NO_CONTENT),
            SuccessShape::Accepted { uri, value: given } => ResponseSpec {
                status: StatusCode::ACCEPTED,
                location: uri.map(Location::Uri),
                body: body_from(&given.unwrap_or(value)),
            },
        }
    }
}

impl ResultMapper<Value> {
    /// Adapt a value-less result, keeping the same mapping behavior without
    /// a typed success value
    pub fn untyped(result: DomainResult<()>, request_path: impl Into<String>) -> Self {
        Self::new(result.map(|()| Value::Null), request_path)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use verdict_domain::{DomainError, Failure};

    use super::*;

    #[derive(Serialize)]
    struct Widget {
        id: u64,
        name: &'static str,
    }

    impl Identify for Widget {
        fn identifier(&self) -> Option<String> {
            Some(self.id.to_string())
        }
    }

    #[derive(Serialize)]
    struct Anonymous {
        name: &'static str,
    }

    impl Identify for Anonymous {
        fn identifier(&self) -> Option<String> {
            None
        }
    }

    fn fail<T>(error: DomainError) -> DomainResult<T> {
        Err(Failure::new(error))
    }

    #[test]
    fn ok_returns_the_value_at_200() {
        let spec = ResultMapper::new(Ok(json!({"id": 7})), "/users/7").ok().build();
        assert_eq!(spec.status, StatusCode::OK);
        assert_eq!(spec.body, ResponseBody::Json(json!({"id": 7})));
        assert!(spec.location.is_none());
    }

    #[test]
    fn ok_with_a_null_value_is_an_empty_200() {
        let spec = ResultMapper::untyped(Ok(()), "/jobs").ok().build();
        assert_eq!(spec.status, StatusCode::OK);
        assert_eq!(spec.body, ResponseBody::Empty);
    }

    #[test]
    fn ok_empty_discards_the_value() {
        let spec = ResultMapper::new(Ok(json!({"id": 7})), "/users/7").ok_empty().build();
        assert_eq!(spec.status, StatusCode::OK);
        assert_eq!(spec.body, ResponseBody::Empty);
    }

    #[test]
    fn no_content_is_an_empty_204() {
        let spec = ResultMapper::new(Ok(json!(1)), "/users/1").no_content().build();
        assert_eq!(spec.status, StatusCode::NO_CONTENT);
        assert_eq!(spec.body, ResponseBody::Empty);
    }

    #[test]
    fn created_derives_location_from_the_identifier() {
        let result: DomainResult<Widget> = Ok(Widget { id: 42, name: "w" });
        let spec = ResultMapper::new(result, "/users").created(None).build();
        assert_eq!(spec.status, StatusCode::CREATED);
        assert_eq!(spec.location, Some(Location::Uri("/users/42".to_owned())));
        assert_eq!(spec.body, ResponseBody::Json(json!({"id": 42, "name": "w"})));
    }

    #[test]
    fn created_without_identifier_falls_back_to_the_request_path() {
        let result: DomainResult<Anonymous> = Ok(Anonymous { name: "w" });
        let spec = ResultMapper::new(result, "/users").created(None).build();
        assert_eq!(spec.location, Some(Location::Uri("/users".to_owned())));
    }

    #[test]
    fn created_prefers_an_explicit_uri() {
        let result: DomainResult<Widget> = Ok(Widget { id: 42, name: "w" });
        let spec = ResultMapper::new(result, "/users").created(Some("/elsewhere/9".to_owned())).build();
        assert_eq!(spec.location, Some(Location::Uri("/elsewhere/9".to_owned())));
    }

    #[test]
    fn erased_values_expose_a_scalar_id_field() {
        let spec = ResultMapper::new(Ok(json!({"id": 42})), "/users").created(None).build();
        assert_eq!(spec.location, Some(Location::Uri("/users/42".to_owned())));
    }

    #[test]
    fn created_at_action_defers_resolution_to_the_host() {
        let spec = ResultMapper::new(Ok(json!({"id": 5})), "/users")
            .created_at_action("get_user", Some(json!({"id": 5})))
            .build();
        assert_eq!(spec.status, StatusCode::CREATED);
        assert_eq!(
            spec.location,
            Some(Location::Action { name: "get_user".to_owned(), params: Some(json!({"id": 5})) })
        );
    }

    #[test]
    fn accepted_uses_the_success_value_by_default() {
        let spec = ResultMapper::new(Ok(json!({"job": 3})), "/jobs").accepted(None, None).build();
        assert_eq!(spec.status, StatusCode::ACCEPTED);
        assert_eq!(spec.body, ResponseBody::Json(json!({"job": 3})));
        assert!(spec.location.is_none());
    }

    #[test]
    fn accepted_with_uri_and_explicit_value() {
        let spec = ResultMapper::new(Ok(json!({"job": 3})), "/jobs")
            .accepted(Some("/jobs/3/status".to_owned()), Some(json!({"state": "queued"})))
            .build();
        assert_eq!(spec.location, Some(Location::Uri("/jobs/3/status".to_owned())));
        assert_eq!(spec.body, ResponseBody::Json(json!({"state": "queued"})));
    }

    #[test]
    #[should_panic(expected = "you must configure a success response")]
    fn build_on_success_without_a_shape_fails_loudly() {
        let _ = ResultMapper::new(Ok(json!(1)), "/users").build();
    }

    #[test]
    fn default_table_maps_every_built_in_variant() {
        let cases = [
            (DomainError::not_found("x"), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (DomainError::conflict("x"), StatusCode::CONFLICT, "CONFLICT"),
            (DomainError::validation("x"), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            (DomainError::unauthorized("x"), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            (DomainError::forbidden("x"), StatusCode::FORBIDDEN, "FORBIDDEN"),
            (DomainError::business("x"), StatusCode::UNPROCESSABLE_ENTITY, "BUSINESS_ERROR"),
        ];

        for (error, status, code) in cases {
            let spec = ResultMapper::untyped(fail(error), "/things").ok().build();
            assert_eq!(spec.status, status);
            let ResponseBody::Problem(body) = spec.body else {
                panic!("expected a problem body");
            };
            assert_eq!(body.code, code);
            assert_eq!(body.instance, "/things");
        }
    }

    #[test]
    fn unregistered_custom_variants_fall_back_to_422() {
        let error = DomainError::custom("EMAIL_ALREADY_EXISTS", "email taken");
        let spec = ResultMapper::untyped(fail(error), "/users").ok().build();
        assert_eq!(spec.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn registered_custom_variants_use_their_mapping() {
        let error = DomainError::custom("EMAIL_ALREADY_EXISTS", "email taken");
        let spec = ResultMapper::untyped(fail(error), "/users")
            .ok()
            .conflict_for(ErrorTag::Custom("EMAIL_ALREADY_EXISTS"))
            .build();
        assert_eq!(spec.status, StatusCode::CONFLICT);
        let ResponseBody::Problem(body) = spec.body else {
            panic!("expected a problem body");
        };
        assert_eq!(body.code, "EMAIL_ALREADY_EXISTS");
        assert_eq!(body.title, "Conflict");
    }

    #[test]
    fn last_registration_for_a_tag_wins() {
        let tag = ErrorTag::Custom("EMAIL_ALREADY_EXISTS");
        let error = DomainError::custom("EMAIL_ALREADY_EXISTS", "email taken");
        let spec = ResultMapper::untyped(fail(error), "/users")
            .ok()
            .unprocessable_for(tag)
            .conflict_for(tag)
            .build();
        assert_eq!(spec.status, StatusCode::CONFLICT);
    }

    #[test]
    fn built_in_defaults_can_be_overridden() {
        let error = DomainError::validation("bad input");
        let spec = ResultMapper::untyped(fail(error), "/users")
            .ok()
            .unprocessable_for(ErrorTag::Validation)
            .build();
        assert_eq!(spec.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn only_the_first_error_drives_the_mapping() {
        let failure = Failure::new(DomainError::not_found("missing"))
            .with_error(DomainError::conflict("also conflicting"));
        let spec = ResultMapper::untyped(Err(failure), "/users/9").ok().build();
        assert_eq!(spec.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_round_trip_promotes_field_errors_once() {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert("email".to_owned(), vec!["required".to_owned()]);
        let error = DomainError::validation("invalid user").with_field_errors(fields);

        let spec = ResultMapper::untyped(fail(error), "/users")
            .ok()
            .bad_request_for(ErrorTag::Validation)
            .build();

        assert_eq!(spec.status, StatusCode::BAD_REQUEST);
        let ResponseBody::Problem(body) = spec.body else {
            panic!("expected a problem body");
        };
        assert_eq!(body.errors.unwrap()["email"], ["required"]);
        assert!(body.metadata.is_none());
    }
}
