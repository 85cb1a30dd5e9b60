//! Revision registry and its conflict rules

use chrono::NaiveDate;

use taller_types::{Client, Error, Result, Vehicle};

use crate::model::{Revision, RevisionId};

/// Ordered collection owning every stored [`Revision`].
///
/// Insertion order is preserved and never reshuffled. The registry
/// is the sole owner of stored revisions: read accessors hand out
/// clones, and mutation goes through the registry addressed by
/// [`RevisionId`], so callers can never alias internal storage.
///
/// Not synchronized; `insert` is a scan-then-append, so a shared
/// registry must be serialized as a whole by the caller.
#[derive(Debug, Default)]
pub struct RevisionRegistry {
    revisions: Vec<Revision>,
}

impl RevisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored revisions, in insertion order.
    pub fn get(&self) -> Vec<Revision> {
        self.revisions.clone()
    }

    /// The stored revisions for `client`, in insertion order.
    pub fn by_client(&self, client: &Client) -> Vec<Revision> {
        self.revisions
            .iter()
            .filter(|r| r.client() == client)
            .cloned()
            .collect()
    }

    /// The stored revisions for `vehicle`, in insertion order.
    pub fn by_vehicle(&self, vehicle: &Vehicle) -> Vec<Revision> {
        self.revisions
            .iter()
            .filter(|r| r.vehicle() == vehicle)
            .cloned()
            .collect()
    }

    /// Append `revision` after checking it against every stored
    /// revision; the first conflicting record decides the error.
    pub fn insert(&mut self, revision: Revision) -> Result<()> {
        self.check_conflicts(revision.client(), revision.vehicle(), revision.start_date())?;
        self.revisions.push(revision);
        Ok(())
    }

    /// Conflict rules, per stored revision in insertion order.
    ///
    /// An open revision blocks any new revision for the same client
    /// or the same vehicle. A closed revision blocks a new one that
    /// does not start strictly after its end date. The client branch
    /// is checked before the vehicle branch in both cases, so the
    /// client message surfaces when both apply. Revisions for
    /// unrelated clients and vehicles never conflict.
    fn check_conflicts(
        &self,
        client: &Client,
        vehicle: &Vehicle,
        start_date: NaiveDate,
    ) -> Result<()> {
        for stored in &self.revisions {
            match stored.end_date() {
                None => {
                    if stored.client() == client {
                        return Err(Error::Conflict(
                            "client already has a revision in progress".to_string(),
                        ));
                    }
                    if stored.vehicle() == vehicle {
                        return Err(Error::Conflict(
                            "vehicle is currently under revision".to_string(),
                        ));
                    }
                }
                Some(end_date) => {
                    if start_date <= end_date {
                        if stored.client() == client {
                            return Err(Error::Conflict(
                                "client has a later revision on record".to_string(),
                            ));
                        }
                        if stored.vehicle() == vehicle {
                            return Err(Error::Conflict(
                                "vehicle has a later revision on record".to_string(),
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// The stored revision matching `id`, if any.
    pub fn find(&self, id: &RevisionId) -> Option<&Revision> {
        self.revisions.iter().find(|r| r.id() == *id)
    }

    fn find_mut(&mut self, id: &RevisionId) -> Result<&mut Revision> {
        self.revisions
            .iter_mut()
            .find(|r| r.id() == *id)
            .ok_or_else(|| Error::NotFound("no matching revision exists".to_string()))
    }

    /// Add hours to the stored revision matching `id` and return a
    /// copy of the updated record.
    pub fn add_hours(&mut self, id: &RevisionId, amount: u32) -> Result<Revision> {
        let revision = self.find_mut(id)?;
        revision.add_hours(amount)?;
        Ok(revision.clone())
    }

    /// Add material cost to the stored revision matching `id` and
    /// return a copy of the updated record.
    pub fn add_material_cost(&mut self, id: &RevisionId, amount: f64) -> Result<Revision> {
        let revision = self.find_mut(id)?;
        revision.add_material_cost(amount)?;
        Ok(revision.clone())
    }

    /// Close the stored revision matching `id` and return a copy of
    /// the closed record.
    pub fn close(&mut self, id: &RevisionId, end_date: NaiveDate) -> Result<Revision> {
        let revision = self.find_mut(id)?;
        revision.close(end_date)?;
        Ok(revision.clone())
    }

    /// Remove the stored revision matching `id`.
    pub fn remove(&mut self, id: &RevisionId) -> Result<()> {
        let index = self
            .revisions
            .iter()
            .position(|r| r.id() == *id)
            .ok_or_else(|| Error::NotFound("no matching revision exists".to_string()))?;
        self.revisions.remove(index);
        Ok(())
    }
}
