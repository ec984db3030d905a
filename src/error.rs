use std::fmt;

use rust_decimal::Decimal;

use crate::identity::VehicleId;

/// A field-level rule a vehicle failed while being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty or whitespace only.
    BlankField { field: &'static str },
    /// A numeric field fell outside its allowed range.
    OutOfRange {
        field: &'static str,
        value: Decimal,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::BlankField { field } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankField { field } => write!(f, "{} cannot be blank", field),
            ValidationError::OutOfRange { field, value } => {
                write!(f, "{} is out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    Validation(ValidationError),
    NotFound { id: VehicleId },
    /// An aggregate no longer fits in a `Decimal`.
    Overflow { field: &'static str },
    LockPoisoned(&'static str),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Validation(err) => write!(f, "invalid vehicle: {}", err),
            InventoryError::NotFound { id } => write!(f, "vehicle {} not found", id),
            InventoryError::Overflow { field } => write!(f, "{} overflowed", field),
            InventoryError::LockPoisoned(operation) => {
                write!(f, "inventory lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for InventoryError {
    fn from(err: ValidationError) -> Self {
        InventoryError::Validation(err)
    }
}

/// Failures while turning raw form input into a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    InvalidNumber { field: &'static str, input: String },
    MissingSelection { field: &'static str },
    UnknownKind(String),
    Validation(ValidationError),
    Inventory(InventoryError),
}

impl IntakeError {
    /// The form input the shell should highlight, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            IntakeError::InvalidNumber { field, .. } => Some(*field),
            IntakeError::MissingSelection { field } => Some(*field),
            IntakeError::UnknownKind(_) => Some("kind"),
            IntakeError::Validation(err) => Some(err.field()),
            IntakeError::Inventory(_) => None,
        }
    }
}

impl fmt::Display for IntakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeError::InvalidNumber { field, input } => {
                write!(f, "{} must be a valid number (got {:?})", field, input)
            }
            IntakeError::MissingSelection { field } => write!(f, "no {} selected", field),
            IntakeError::UnknownKind(label) => write!(f, "unknown vehicle kind: {}", label),
            IntakeError::Validation(err) => write!(f, "{}", err),
            IntakeError::Inventory(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Validation(err) => Some(err),
            IntakeError::Inventory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for IntakeError {
    fn from(err: ValidationError) -> Self {
        IntakeError::Validation(err)
    }
}

impl From<InventoryError> for IntakeError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Validation(err) => IntakeError::Validation(err),
            other => IntakeError::Inventory(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid inventory config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
