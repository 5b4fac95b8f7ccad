//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the business rules for the Signalglow monitor:
//! the sense-map-drive cycle and its orchestration.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod ports;
pub mod service;
