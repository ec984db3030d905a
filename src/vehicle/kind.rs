use serde::{Deserialize, Serialize};

/// The closed set of vehicle kinds, each carrying its own attributes.
///
/// A new kind is added here and nowhere else: give it a variant, a label,
/// and teach `from_label` how to build it from `KindAttributes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum VehicleKind {
    Car,
    Motorcycle { has_sidecar: bool },
}

/// Kind-specific inputs collected alongside the shared fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindAttributes {
    pub has_sidecar: bool,
}

impl VehicleKind {
    pub const LABELS: [&'static str; 2] = ["Car", "Motorcycle"];

    /// Discriminator shown to users and used for grouping.
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Motorcycle { .. } => "Motorcycle",
        }
    }

    pub fn from_label(label: &str, attributes: KindAttributes) -> Option<Self> {
        match label {
            "Car" => Some(VehicleKind::Car),
            "Motorcycle" => Some(VehicleKind::Motorcycle {
                has_sidecar: attributes.has_sidecar,
            }),
            _ => None,
        }
    }

    pub fn attributes(&self) -> KindAttributes {
        match self {
            VehicleKind::Car => KindAttributes::default(),
            VehicleKind::Motorcycle { has_sidecar } => KindAttributes {
                has_sidecar: *has_sidecar,
            },
        }
    }

    /// `None` for kinds that cannot carry a sidecar.
    pub fn has_sidecar(&self) -> Option<bool> {
        match self {
            VehicleKind::Motorcycle { has_sidecar } => Some(*has_sidecar),
            _ => None,
        }
    }

    /// Extra text appended to a vehicle's description.
    pub(crate) fn describe_suffix(&self) -> Option<&'static str> {
        match self {
            VehicleKind::Car => None,
            VehicleKind::Motorcycle { has_sidecar: true } => Some("with sidecar"),
            VehicleKind::Motorcycle { has_sidecar: false } => Some("no sidecar"),
        }
    }
}
