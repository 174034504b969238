//! Domain Layer
//!
//! Policy model, validation rules and the ports the infrastructure layer
//! implements. Nothing in here performs I/O.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod raw;
pub mod schema;
pub mod services;
pub mod value_objects;
