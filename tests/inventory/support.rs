use vehicle_inventory::{Decimal, Inventory, Vehicle, VehicleSpec};

pub fn car(make: &str, model: &str, year: i32, price: i64, is_new: bool) -> VehicleSpec {
    VehicleSpec::car()
        .make(make)
        .model(model)
        .year(year)
        .price(Decimal::from(price))
        .is_new(is_new)
}

pub fn motorcycle(make: &str, model: &str, year: i32, price: i64, has_sidecar: bool) -> VehicleSpec {
    VehicleSpec::motorcycle(has_sidecar)
        .make(make)
        .model(model)
        .year(year)
        .price(Decimal::from(price))
        .is_new(true)
}

/// The four vehicles the demo inventory starts with.
pub fn stocked() -> (Inventory, Vec<Vehicle>) {
    let inventory = Inventory::new();
    let vehicles = vec![
        inventory.create(car("Hyundai", "Tucson", 2020, 17500, true)).unwrap(),
        inventory.create(car("Dodge", "Caliber", 2012, 11499, true)).unwrap(),
        inventory.create(car("Volkswagen", "Beetle", 1979, 5999, false)).unwrap(),
        inventory.create(motorcycle("Honda", "CB500F", 2022, 8500, false)).unwrap(),
    ];
    (inventory, vehicles)
}

pub fn ids(vehicles: &[Vehicle]) -> Vec<u64> {
    vehicles.iter().map(|v| v.id().value()).collect()
}
