//! Shared entity types: clients and vehicles
//!
//! Both types carry descriptive fields that may change over an
//! entity's life, but their identity is a single field: the DNI for a
//! client, the license plate for a vehicle. Equality and hashing use
//! the identity field only, so registries keyed on these types keep
//! matching an entity even after its descriptive data is edited.
//! Validating the fields themselves (plate format, phone format, …)
//! is the caller's concern.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A workshop client, identified by DNI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub dni: String,
    pub name: String,
    pub phone: String,
}

impl Client {
    pub fn new(dni: impl Into<String>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            dni: dni.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.dni == other.dni
    }
}

impl Eq for Client {}

impl Hash for Client {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dni.hash(state);
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.name, self.dni, self.phone)
    }
}

/// A vehicle, identified by license plate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub make: String,
    pub model: String,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            make: make.into(),
            model: model.into(),
        }
    }
}

impl PartialEq for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.plate == other.plate
    }
}

impl Eq for Vehicle {}

impl Hash for Vehicle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plate.hash(state);
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.make, self.model, self.plate)
    }
}
