//! Domain model types

pub mod revision;

pub use revision::{Revision, RevisionId, DAILY_RATE, HOURLY_RATE, MATERIAL_MARKUP};
