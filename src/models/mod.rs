mod course;
mod submission;
mod vote;

pub use course::Course;
pub use submission::Submission;
pub use vote::{Tally, Verdict, Vote};
