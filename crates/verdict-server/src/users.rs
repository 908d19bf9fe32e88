//! User endpoints: the CRUD surface that exercises the mapper end-to-end

use axum::Router;
use axum::extract::{OriginalUri, Path, State};
use axum::response::Response;
use axum::routing::get;
use verdict_domain::ErrorTag;
use verdict_http::ResultMapper;

use crate::AppState;
use crate::respond::render;
use crate::service::EMAIL_ALREADY_EXISTS;
use crate::user::User;

/// Routes for the user resource
pub fn user_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .with_state(state)
}

async fn get_user(State(state): State<AppState>, OriginalUri(uri): OriginalUri, Path(id): Path<u64>) -> Response {
    let result = state.users.get(id);
    render(ResultMapper::new(result, uri.path()).ok().build(), state.routes.as_ref())
}

async fn list_users(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let result = state.users.get_all();
    render(ResultMapper::new(result, uri.path()).ok().build(), state.routes.as_ref())
}

async fn create_user(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    axum::Json(user): axum::Json<User>,
) -> Response {
    let result = state.users.create(user);
    let spec = ResultMapper::new(result, uri.path())
        .created(None)
        .conflict_for(ErrorTag::Custom(EMAIL_ALREADY_EXISTS))
        .build();
    render(spec, state.routes.as_ref())
}
