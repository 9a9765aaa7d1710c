//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod content_repo;
pub mod lead_repo;
pub mod media_repo;

pub use content_repo::ContentRepo;
pub use lead_repo::LeadRepo;
pub use media_repo::MediaRepo;
