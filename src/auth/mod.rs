pub mod extractor;
pub mod voter;
