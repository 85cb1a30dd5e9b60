//! End-to-end flow over the registries: register vehicles, open a
//! revision, accumulate work, close it, bill it, and open the
//! follow-up revision once the first one is out of the way.

use chrono::NaiveDate;
use taller_domain::{Revision, RevisionRegistry, VehicleRegistry};
use taller_types::{Client, Error, Vehicle};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ana() -> Client {
    Client::new("11111111A", "Ana", "600111222")
}

fn bruno() -> Client {
    Client::new("22222222B", "Bruno", "600333444")
}

fn leon() -> Vehicle {
    Vehicle::new("1234BCD", "Seat", "Leon")
}

fn clio() -> Vehicle {
    Vehicle::new("5678FGH", "Renault", "Clio")
}

#[test]
fn full_service_flow() {
    let mut vehicles = VehicleRegistry::new();
    vehicles.insert(leon()).unwrap();
    vehicles.insert(clio()).unwrap();
    assert!(matches!(
        vehicles.insert(Vehicle::new("1234BCD", "Seat", "Ibiza")),
        Err(Error::AlreadyExists(_))
    ));

    let mut revisions = RevisionRegistry::new();
    let first = Revision::new(ana(), leon(), date(2024, 1, 10)).unwrap();
    let first_id = first.id();
    revisions.insert(first).unwrap();

    // While Ana's revision is open, neither she nor the Leon can
    // start another one, but Bruno's Clio can.
    assert!(matches!(
        revisions.insert(Revision::new(ana(), clio(), date(2024, 1, 12)).unwrap()),
        Err(Error::Conflict(_))
    ));
    assert!(matches!(
        revisions.insert(Revision::new(bruno(), leon(), date(2024, 1, 12)).unwrap()),
        Err(Error::Conflict(_))
    ));
    let parallel = Revision::new(bruno(), clio(), date(2024, 1, 12)).unwrap();
    revisions.insert(parallel).unwrap();

    // Work accumulates through the registry, addressed by identity.
    revisions.add_hours(&first_id, 3).unwrap();
    revisions.add_hours(&first_id, 2).unwrap();
    revisions.add_material_cost(&first_id, 20.0).unwrap();
    let closed = revisions.close(&first_id, date(2024, 1, 15)).unwrap();
    assert!((closed.price() - 230.0).abs() < 0.01);

    // A follow-up for Ana must start strictly after the closed end.
    assert!(matches!(
        revisions.insert(Revision::new(ana(), leon(), date(2024, 1, 15)).unwrap()),
        Err(Error::Conflict(_))
    ));
    // Bruno's Clio revision is still open, so the Leon follow-up for
    // Ana on the 16th is fine while the Clio stays blocked.
    revisions
        .insert(Revision::new(ana(), leon(), date(2024, 1, 16)).unwrap())
        .unwrap();

    let ana_history = revisions.by_client(&ana());
    assert_eq!(ana_history.len(), 2);
    assert_eq!(ana_history[0].start_date(), date(2024, 1, 10));
    assert_eq!(ana_history[1].start_date(), date(2024, 1, 16));

    let leon_history = revisions.by_vehicle(&leon());
    assert_eq!(leon_history.len(), 2);

    // Dropping the follow-up removes it from every view.
    let follow_up_id = ana_history[1].id();
    revisions.remove(&follow_up_id).unwrap();
    assert!(revisions.find(&follow_up_id).is_none());
    assert!(matches!(
        revisions.add_hours(&follow_up_id, 1),
        Err(Error::NotFound(_))
    ));
    assert_eq!(revisions.by_client(&ana()).len(), 1);
}

#[test]
fn registry_snapshot_serializes() {
    let mut revisions = RevisionRegistry::new();
    revisions
        .insert(Revision::new(ana(), leon(), date(2024, 1, 10)).unwrap())
        .unwrap();
    let json = serde_json::to_string_pretty(&revisions.get()).unwrap();
    assert!(json.contains("\"1234BCD\""));
    assert!(json.contains("\"2024-01-10\""));
}
