pub mod courses;
pub mod events;
pub mod submissions;
pub mod votes;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Courses
        .route("/api/v1/courses", get(courses::list).post(courses::create))
        .route("/api/v1/courses/{id}", get(courses::get))
        .route(
            "/api/v1/courses/{id}/submissions",
            get(submissions::list_by_course),
        )
        .route("/api/v1/courses/{id}/events", get(events::stream_course))
        // Submissions
        .route("/api/v1/submissions", post(submissions::create))
        .route("/api/v1/submissions/{id}", get(submissions::get))
        .route("/api/v1/submissions/{id}/votes", post(votes::cast))
}
