//! Domain Layer - Core value objects and domain errors
//!
//! This module contains the closed model-name enumeration, the in-memory
//! catalog constant, and the domain-level error type. Nothing here touches
//! HTTP; the presentation layer maps these types onto the wire.

pub mod errors;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
