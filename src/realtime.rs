//! Per-course notification fan-out.
//!
//! Every course gets its own broadcast channel, created the first time
//! somebody subscribes. Events are hints to refetch, so delivery is best
//! effort: a publish with no listeners is dropped, and a subscriber that falls
//! behind is told to resync instead of being replayed.

use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::broadcast;

/// Buffered events per course before slow subscribers start lagging.
const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CourseEvent {
    NewSoal {
        submission_id: i64,
        message: String,
    },
    Vote {
        submission_id: i64,
        correct_count: i64,
        incorrect_count: i64,
    },
    Resync,
}

impl CourseEvent {
    /// SSE event name.
    pub fn name(&self) -> &'static str {
        match self {
            CourseEvent::NewSoal { .. } => "new-soal",
            CourseEvent::Vote { .. } => "vote",
            CourseEvent::Resync => "resync",
        }
    }
}

pub struct Hub {
    channels: DashMap<i64, broadcast::Sender<CourseEvent>>,
}

impl Hub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    pub fn subscribe(&self, course_id: i64) -> broadcast::Receiver<CourseEvent> {
        self.channels
            .entry(course_id)
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Send to everyone watching `course_id`. Returns how many receivers got it.
    pub fn publish(&self, course_id: i64, event: CourseEvent) -> usize {
        match self.channels.get(&course_id) {
            Some(tx) => tx.send(event).unwrap_or(0),
            None => 0,
        }
    }

    /// Drop channels nobody listens to anymore.
    pub fn prune(&self) -> usize {
        let before = self.channels.len();
        self.channels.retain(|_, tx| tx.receiver_count() > 0);
        before - self.channels.len()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}
