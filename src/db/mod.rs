pub mod courses;
pub mod submissions;
pub mod votes;
