//! Notebook container model.
//!
//! # Responsibility
//! - Own an ordered sequence of [`Person`] entries under one label.
//! - Render the whole notebook as a labeled text block.
//!
//! # Invariants
//! - Entries keep insertion order; nothing reorders or deduplicates them.
//! - Entries are owned exclusively; mutation after insertion goes through
//!   [`Notebook::entries_mut`].

use crate::model::person::Person;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Labeled, append-only collection of contact entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    label: String,
    entries: Vec<Person>,
}

impl Notebook {
    /// Creates an empty notebook with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry to the end of the sequence, taking ownership.
    ///
    /// No duplicate check and no capacity limit.
    pub fn add_entry(&mut self, person: Person) {
        self.entries.push(person);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrows the entries in insertion order.
    pub fn entries(&self) -> &[Person] {
        &self.entries
    }

    /// Mutably borrows the entries, keeping ownership inside the notebook.
    pub fn entries_mut(&mut self) -> &mut [Person] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for Notebook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "======== {} ========", self.label)?;
        for entry in &self.entries {
            // Each entry block is followed by one blank separator line.
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
