//! Result → HTTP response mapping
//!
//! Translates a [`verdict_domain::DomainResult`] into a transport-agnostic
//! [`ResponseSpec`]: a status code, an optional `Location`, and either a
//! success body or an RFC 7807-style problem body. Built on the `http` crate
//! only; the server layer owns the conversion to actual axum responses,
//! keeping this crate decoupled from the host framework.

mod catalog;
mod mapper;
mod problem;
mod response;

pub use catalog::{ErrorTypeInfo, error_type_info};
pub use mapper::{Identify, ResultMapper, RouteResolver};
pub use problem::{ProblemBody, UNKNOWN_ERROR, problem_for};
pub use response::{Location, ResponseBody, ResponseSpec};
