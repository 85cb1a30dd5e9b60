//! In-memory registries owning the stored entities

pub mod revisions;
pub mod vehicles;

pub use revisions::RevisionRegistry;
pub use vehicles::VehicleRegistry;
