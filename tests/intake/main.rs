//! Form intake integration tests.
//!
//! Drives the inventory the way an entry form does: raw text in, a vehicle
//! or a field-named error out.

use vehicle_inventory::catalog::{current_year, year_options, MAKES, VEHICLE_KINDS};
use vehicle_inventory::{
    seed, Decimal, IntakeError, Inventory, ValidationError, VehicleForm, VehicleKind,
};

fn filled(kind: &str, model: &str, price: &str) -> VehicleForm {
    VehicleForm {
        kind: Some(kind.to_string()),
        make: Some("Hyundai".to_string()),
        model: model.to_string(),
        year: Some(2020),
        price: price.to_string(),
        is_new: true,
        has_sidecar: false,
    }
}

#[test]
fn submit_adds_to_inventory() {
    let inventory = Inventory::new();
    let vehicle = filled("Car", " Tucson ", "17500").submit(&inventory).unwrap();

    assert_eq!(
        vehicle.describe(),
        "[1] 2020 Hyundai Tucson - Car - New - $17,500.00"
    );
    assert_eq!(inventory.all().unwrap(), vec![vehicle]);
}

#[test]
fn non_numeric_price_highlights_price() {
    let inventory = Inventory::new();
    let err = filled("Car", "Tucson", "seventeen").submit(&inventory).unwrap_err();

    assert_eq!(
        err,
        IntakeError::InvalidNumber {
            field: "price",
            input: "seventeen".to_string(),
        }
    );
    assert_eq!(err.field(), Some("price"));
    assert_eq!(inventory.allocator().count(), 0);
}

#[test]
fn blank_model_surfaces_as_validation() {
    let inventory = Inventory::new();
    let err = filled("Car", "   ", "100").submit(&inventory).unwrap_err();

    assert_eq!(
        err,
        IntakeError::Validation(ValidationError::BlankField { field: "model" })
    );
    assert_eq!(err.field(), Some("model"));
    assert!(inventory.is_empty().unwrap());
}

#[test]
fn negative_price_surfaces_as_validation() {
    let inventory = Inventory::new();
    let err = filled("Motorcycle", "CB500F", "-0.01").submit(&inventory).unwrap_err();

    assert_eq!(
        err,
        IntakeError::Validation(ValidationError::OutOfRange {
            field: "price",
            value: Decimal::new(-1, 2),
        })
    );
    assert_eq!(inventory.allocator().count(), 0);
}

#[test]
fn edit_round_trip_creates_a_new_entry() {
    let inventory = Inventory::new();
    let seeded = seed::seed_demo(&inventory).unwrap();
    let bike = &seeded[3];

    let mut form = VehicleForm::from_vehicle(bike);
    assert_eq!(form.kind.as_deref(), Some("Motorcycle"));
    assert_eq!(form.price, "8500");
    assert!(!form.has_sidecar);

    form.has_sidecar = true;
    let edited = form.submit(&inventory).unwrap();

    assert_eq!(edited.kind(), &VehicleKind::Motorcycle { has_sidecar: true });
    assert_eq!(edited.id().value(), 5);
    assert_eq!(inventory.find_by_id(bike.id()).unwrap().has_sidecar(), Some(false));
    assert_eq!(inventory.len().unwrap(), 5);
}

#[test]
fn loading_a_car_clears_the_sidecar_flag() {
    let inventory = Inventory::new();
    let seeded = seed::seed_demo(&inventory).unwrap();
    let form = VehicleForm::from_vehicle(&seeded[0]);

    assert_eq!(form.kind.as_deref(), Some("Car"));
    assert!(!form.has_sidecar);
    assert_eq!(form.year, Some(2020));
}

#[test]
fn default_form_offers_catalog_choices() {
    let form = VehicleForm::default();
    assert_eq!(form.kind.as_deref(), Some(VEHICLE_KINDS[0]));
    assert_eq!(form.make.as_deref(), Some(MAKES[0]));

    let years = year_options(current_year(), 50);
    assert_eq!(form.year, years.first().copied());
}
