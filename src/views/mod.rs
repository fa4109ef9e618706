pub mod index;
pub mod submissions;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(index::page))
        // HTMX partials
        .route(
            "/htmx/courses/{course_id}/submissions",
            get(submissions::table_partial),
        )
}
