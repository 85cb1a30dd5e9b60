//! Vehicle registry

use taller_types::{Error, Result, Vehicle};

/// Ordered collection of vehicles, unique by license plate.
///
/// The simpler companion of [`RevisionRegistry`]: a uniqueness guard
/// only, with no temporal rules.
///
/// [`RevisionRegistry`]: crate::registry::RevisionRegistry
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored vehicles, in insertion order.
    pub fn get(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }

    /// Append `vehicle` unless one with the same plate is stored.
    pub fn insert(&mut self, vehicle: Vehicle) -> Result<()> {
        if self.vehicles.contains(&vehicle) {
            return Err(Error::AlreadyExists(
                "a vehicle with that plate is already registered".to_string(),
            ));
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// The stored vehicle equal to `vehicle` (same plate), if any.
    pub fn find(&self, vehicle: &Vehicle) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| *v == vehicle)
    }

    /// Remove the stored vehicle equal to `vehicle`.
    pub fn remove(&mut self, vehicle: &Vehicle) -> Result<()> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v == vehicle)
            .ok_or_else(|| Error::NotFound("no matching vehicle exists".to_string()))?;
        self.vehicles.remove(index);
        Ok(())
    }
}
