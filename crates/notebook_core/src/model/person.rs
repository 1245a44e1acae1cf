//! Person model and address delegation.
//!
//! # Responsibility
//! - Hold one contact's name and phone number.
//! - Exclusively own the contact's postal [`Address`] and forward address
//!   mutation to it.
//!
//! # Invariants
//! - The owned address exists for the whole person lifetime; it starts
//!   empty and changes only through [`Person::set_address`].
//! - Delegated calls are forwarded verbatim; this layer adds no validation
//!   and no transformation.

use crate::model::address::Address;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One contact entry: name, phone, and an exclusively owned address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    phone: String,
    address: Address,
}

impl Person {
    /// Creates a person with an empty owned address.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: Address::default(),
        }
    }

    /// Replaces the owned address by delegating to [`Address::replace`].
    pub fn set_address(
        &mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) {
        self.address.replace(street, city, country);
    }

    /// Overwrites the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Overwrites the phone number.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Borrows the owned address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Renders the owned address, delegating to [`Address::full_address`].
    pub fn full_address(&self) -> String {
        self.address.full_address()
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Person Info ===")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "{}", self.address)
    }
}
