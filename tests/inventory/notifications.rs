use std::sync::{mpsc, Mutex};
use std::time::Duration;

use vehicle_inventory::events::{VEHICLE_ADDED, VEHICLE_REMOVED};
use vehicle_inventory::{Inventory, VehicleId};

use crate::support::{car, motorcycle};

fn listen(inventory: &Inventory, event: &str) -> mpsc::Receiver<serde_json::Value> {
    let (tx, rx) = mpsc::channel();
    let tx = Mutex::new(tx);
    inventory
        .on(event, move |payload: String| {
            let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
            let _ = tx.lock().unwrap().send(value);
        })
        .unwrap();
    rx
}

#[test]
fn added_carries_the_vehicle() {
    let inventory = Inventory::new();
    let rx = listen(&inventory, VEHICLE_ADDED);

    let bike = inventory.create(motorcycle("Honda", "CB500F", 2022, 8500, false)).unwrap();

    let payload = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(payload["id"], bike.id().value());
    assert_eq!(payload["kind"], "Motorcycle");
    assert_eq!(payload["has_sidecar"], false);
    assert_eq!(payload["model"], "CB500F");
}

#[test]
fn removed_fires_only_for_held_vehicles() {
    let inventory = Inventory::new();
    let rx = listen(&inventory, VEHICLE_REMOVED);
    let civic = inventory.create(car("Honda", "Civic", 2019, 15000, false)).unwrap();

    inventory.remove(VehicleId(9999)).unwrap();
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());

    inventory.remove(civic.id()).unwrap();
    let payload = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(payload["id"], civic.id().value());
}

#[test]
fn rejected_vehicles_are_not_announced() {
    let inventory = Inventory::new();
    let rx = listen(&inventory, VEHICLE_ADDED);

    assert!(inventory.create(car("Honda", " ", 2019, 15000, false)).is_err());
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn clones_share_listeners() {
    let inventory = Inventory::new();
    let rx = listen(&inventory, VEHICLE_ADDED);

    let handle = inventory.clone();
    handle.create(car("Kia", "Soul", 2016, 7000, false)).unwrap();

    assert!(rx.recv_timeout(Duration::from_secs(1)).is_ok());
}
