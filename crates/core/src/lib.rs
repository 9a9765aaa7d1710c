//! Domain core for the medifab marketing backend.
//!
//! Holds the pure domain model (leads, search results), the form
//! validation layer, the lead intake pipeline, and the search
//! aggregator, together with the trait seams they depend on
//! ([`store::ContentStore`], [`notify::NotificationDispatcher`]).
//! No database or HTTP dependencies live here.

pub mod error;
pub mod intake;
pub mod lead;
pub mod notify;
pub mod search;
pub mod store;
pub mod types;
pub mod upload;
pub mod validation;
