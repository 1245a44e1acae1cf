//! Postal address model.
//!
//! # Responsibility
//! - Hold the street/city/country triple for one contact entry.
//! - Provide whole-value replacement and single-line rendering.
//!
//! # Invariants
//! - All three fields default to empty text until explicitly set.
//! - `replace` overwrites every field unconditionally; there is no merge.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Postal address owned by exactly one [`Person`](crate::model::person::Person).
///
/// Fields accept arbitrary text; nothing here validates or normalizes input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

impl Address {
    /// Creates an address with all three fields set.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Overwrites all three fields at once.
    ///
    /// Full-replace semantics: previous values never survive, even when the
    /// new ones are empty.
    pub fn replace(
        &mut self,
        street: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) {
        self.street = street.into();
        self.city = city.into();
        self.country = country.into();
    }

    /// Renders the current fields as `"<street>, <city>, <country>"`.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}", self.street, self.city, self.country)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address: {}", self.full_address())
    }
}
