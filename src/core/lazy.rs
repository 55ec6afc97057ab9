//! core::lazy
//!
//! Single-assignment resolution slot shared by [`Word`](super::word::Word)
//! and [`Synset`](super::synset::Synset).
//!
//! A slot starts either filled (the entity was built from a full row) or
//! empty (only the identity key is known). The first read of an empty slot
//! runs the loader once and stores its outcome, found or missing. Loader
//! errors are returned without filling the slot, so a later read retries.

use std::cell::OnceCell;

use crate::store::StoreError;

/// Memoized outcome of resolving an identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution<T> {
    /// The backing row was found.
    Found(T),
    /// No row exists for the key.
    Missing,
}

/// A resolution slot.
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    cell: OnceCell<Resolution<T>>,
}

impl<T> Slot<T> {
    /// A slot already holding a resolved value.
    pub(crate) fn resolved(value: T) -> Self {
        Self {
            cell: OnceCell::from(Resolution::Found(value)),
        }
    }

    /// An empty slot, resolved on first read.
    pub(crate) fn pending() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Whether the slot has been filled.
    pub(crate) fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Read the slot, running `load` if it is still empty.
    pub(crate) fn get_or_load<F>(&self, load: F) -> Result<Option<&T>, StoreError>
    where
        F: FnOnce() -> Result<Option<T>, StoreError>,
    {
        let resolution = match self.cell.get() {
            Some(resolution) => resolution,
            None => {
                let loaded = load()?;
                self.cell.get_or_init(|| match loaded {
                    Some(value) => Resolution::Found(value),
                    None => Resolution::Missing,
                })
            }
        };
        Ok(match resolution {
            Resolution::Found(value) => Some(value),
            Resolution::Missing => None,
        })
    }
}
