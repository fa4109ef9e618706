pub mod fields;
pub mod format;
pub mod honeypot;
pub mod metadata;
pub mod parser;
pub mod pipeline;
pub mod profanity;
