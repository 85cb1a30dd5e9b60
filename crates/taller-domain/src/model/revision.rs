//! The revision service record

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use taller_types::{Client, Error, Result, Vehicle};

/// Billed per accumulated work hour.
pub const HOURLY_RATE: f64 = 30.0;
/// Billed per whole day between start and end of a closed revision.
pub const DAILY_RATE: f64 = 10.0;
/// Multiplier applied to accumulated material cost.
pub const MATERIAL_MARKUP: f64 = 1.5;

/// Identity key for a revision.
///
/// Two revisions are the same service record iff client, vehicle and
/// start date all match, regardless of accumulated hours, material
/// cost or open/closed state. Registries address stored revisions by
/// this key, so callers never need to build a throwaway `Revision`
/// just to look one up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevisionId {
    pub client: Client,
    pub vehicle: Vehicle,
    pub start_date: NaiveDate,
}

/// A single vehicle-service record.
///
/// Created open with zero accumulators; hours and material cost can
/// only grow while open; closing with an end date is permanent and
/// freezes the record. The final price is computed, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revision {
    client: Client,
    vehicle: Vehicle,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    hours: u32,
    material_cost: f64,
}

impl Revision {
    /// Open a new revision starting on `start_date`.
    ///
    /// The start date cannot be in the future.
    pub fn new(client: Client, vehicle: Vehicle, start_date: NaiveDate) -> Result<Self> {
        if start_date > today() {
            return Err(Error::InvalidArgument(
                "start date cannot be in the future".to_string(),
            ));
        }
        Ok(Self {
            client,
            vehicle,
            start_date,
            end_date: None,
            hours: 0,
            material_cost: 0.0,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// End date, `None` while the revision is open.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn material_cost(&self) -> f64 {
        self.material_cost
    }

    /// The identity key of this record.
    pub fn id(&self) -> RevisionId {
        RevisionId {
            client: self.client.clone(),
            vehicle: self.vehicle.clone(),
            start_date: self.start_date,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.end_date.is_some()
    }

    /// Add worked hours. Fails on a closed revision or a zero amount.
    pub fn add_hours(&mut self, amount: u32) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Conflict(
                "cannot add hours, the revision is closed".to_string(),
            ));
        }
        if amount == 0 {
            return Err(Error::InvalidArgument(
                "hours to add must be greater than zero".to_string(),
            ));
        }
        self.hours += amount;
        Ok(())
    }

    /// Add material cost. Fails on a closed revision or an amount
    /// that is not a positive finite number.
    pub fn add_material_cost(&mut self, amount: f64) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Conflict(
                "cannot add material cost, the revision is closed".to_string(),
            ));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidArgument(
                "material cost to add must be greater than zero".to_string(),
            ));
        }
        self.material_cost += amount;
        Ok(())
    }

    /// Close the revision on `end_date`. Irreversible.
    ///
    /// The end date cannot precede the start date or lie in the
    /// future; a second close always fails.
    pub fn close(&mut self, end_date: NaiveDate) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Conflict("the revision is already closed".to_string()));
        }
        if end_date < self.start_date {
            return Err(Error::InvalidArgument(
                "end date cannot be before the start date".to_string(),
            ));
        }
        if end_date > today() {
            return Err(Error::InvalidArgument(
                "end date cannot be in the future".to_string(),
            ));
        }
        self.end_date = Some(end_date);
        Ok(())
    }

    /// Final price: hours and material always count; the day-based
    /// charge only applies once the revision is closed.
    pub fn price(&self) -> f64 {
        f64::from(self.hours) * HOURLY_RATE
            + self.material_cost * MATERIAL_MARKUP
            + self.elapsed_days() as f64 * DAILY_RATE
    }

    fn elapsed_days(&self) -> i64 {
        match self.end_date {
            Some(end) => (end - self.start_date).num_days(),
            None => 0,
        }
    }
}

/// Equality follows the identity key only, so a mutated stored
/// revision still matches the key it was inserted under.
impl PartialEq for Revision {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client
            && self.vehicle == other.vehicle
            && self.start_date == other.start_date
    }
}

impl Eq for Revision {}

impl Hash for Revision {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.client.hash(state);
        self.vehicle.hash(state);
        self.start_date.hash(state);
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start_date.format("%d/%m/%Y");
        match self.end_date {
            None => write!(
                f,
                "{} - {}: ({} - ), {} hours, {:.2} in material",
                self.client, self.vehicle, start, self.hours, self.material_cost
            ),
            Some(end) => write!(
                f,
                "{} - {}: ({} - {}), {} hours, {:.2} in material, {:.2} total",
                self.client,
                self.vehicle,
                start,
                end.format("%d/%m/%Y"),
                self.hours,
                self.material_cost,
                self.price()
            ),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
