//! HTTP handlers for the public marketing API.

pub mod contact;
pub mod quote;
pub mod search;
pub mod survey;
