use axum::Json;
use axum::response::{IntoResponse, Response};
use http::HeaderValue;
use verdict_http::{Location, ResponseBody, ResponseSpec, RouteResolver};

/// Turn a response descriptor into an axum response
///
/// Deferred [`Location::Action`] targets are resolved through the host's
/// route resolver; an unresolvable action logs a warning and omits the
/// header rather than failing the response.
pub fn render(spec: ResponseSpec, routes: &dyn RouteResolver) -> Response {
    let location = spec.location.and_then(|location| match location {
        Location::Uri(uri) => Some(uri),
        Location::Action { name, params } => {
            let resolved = routes.resolve(&name, params.as_ref());
            if resolved.is_none() {
                tracing::warn!(route = %name, "named route did not resolve, omitting Location header");
            }
            resolved
        }
    });

    let mut response = match spec.body {
        ResponseBody::Empty => spec.status.into_response(),
        ResponseBody::Json(value) => (spec.status, Json(value)).into_response(),
        ResponseBody::Problem(problem) => (spec.status, Json(problem)).into_response(),
    };

    if let Some(uri) = location
        && let Ok(value) = HeaderValue::from_str(&uri)
    {
        response.headers_mut().insert(http::header::LOCATION, value);
    }

    response
}
