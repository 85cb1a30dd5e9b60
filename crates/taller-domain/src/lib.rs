//! Domain model and registries for the taller workshop
//!
//! `model` holds the [`Revision`] service record and its identity
//! key; `registry` holds the collections that own stored revisions
//! and vehicles and enforce the cross-record rules.

pub mod model;
pub mod registry;

pub use model::{Revision, RevisionId};
pub use registry::{RevisionRegistry, VehicleRegistry};
