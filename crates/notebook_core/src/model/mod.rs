//! Contact notebook domain model.
//!
//! # Responsibility
//! - Define the owned-value shapes for addresses, persons and notebooks.
//! - Keep rendering rules next to the data they describe.
//!
//! # Invariants
//! - Ownership forms a strict tree: a notebook owns its persons, a person
//!   owns its address. Nothing in this module shares or leaks entries.

pub mod address;
pub mod notebook;
pub mod person;
