use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;

use crate::db;
use crate::error::AppError;
use crate::realtime::CourseEvent;
use crate::state::SharedState;

/// Server-sent events for one course. Each event means "refetch the table".
pub async fn stream_course(
    State(state): State<SharedState>,
    Path(course_id): Path<i64>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, AppError> {
    db::courses::find_by_id(&state.pool, course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let rx = state.hub.subscribe(course_id);
    tracing::debug!(course_id, "event subscriber connected");

    let shutdown = state.shutdown.subscribe();

    let events = stream::unfold((rx, shutdown), move |(mut rx, mut shutdown)| async move {
        if *shutdown.borrow() {
            return None;
        }

        let received = tokio::select! {
            received = rx.recv() => received,
            _ = shutdown.changed() => return None,
        };

        let event = match received {
            Ok(event) => event,
            Err(RecvError::Lagged(missed)) => {
                tracing::warn!(course_id, missed, "event subscriber lagged");
                CourseEvent::Resync
            }
            Err(RecvError::Closed) => return None,
        };
        let sse = Event::default().event(event.name()).json_data(&event);
        Some((sse, (rx, shutdown)))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}
