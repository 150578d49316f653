pub mod summarizer;
pub mod upload;
