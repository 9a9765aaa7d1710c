//! Row models for the content, lead, and media tables.

pub mod content;
pub mod lead;
pub mod media;
