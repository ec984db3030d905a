//! Inventory integration tests.
//!
//! Exercises the public surface a UI shell drives:
//! - Building vehicles with validation and id allocation
//! - Add / remove / list / lookup with insertion order
//! - Statistics recomputed on every call
//! - Change notifications (with the `emitter` feature)

#[allow(dead_code)]
mod support;
#[cfg(feature = "emitter")]
mod notifications;
