//! Owned coefficient storage.
//!
//! A `CoeffBuffer` is a zero-filled sequence of `i64` slots indexed by
//! exponent. Its length is the polynomial's capacity: it can grow but
//! never shrinks for the life of the value, and every slot is defined
//! (zero unless explicitly written), so readers never see stale data.

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Growable, zero-initialized backing storage for polynomial coefficients.
///
/// Slot `i` holds the coefficient of the term with exponent `i`.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct CoeffBuffer {
    slots: Vec<i64>,
}

impl CoeffBuffer {
    /// Allocate a buffer of `len` slots, all zero.
    pub fn zeroed(len: usize) -> Self {
        CoeffBuffer {
            slots: vec![0; len],
        }
    }

    /// Number of allocated slots (the capacity of the owning polynomial).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no slots are allocated.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ensure at least `min_len` slots are allocated.
    ///
    /// Existing slots keep their values and the new region is zero-filled.
    /// A buffer never shrinks: if `min_len` is not larger than the current
    /// length this is a no-op.
    pub fn grow(&mut self, min_len: usize) {
        if min_len > self.slots.len() {
            self.slots.resize(min_len, 0);
        }
    }

    /// Read slot `i`. Callers stay within `0..len()`.
    pub fn get(&self, i: usize) -> i64 {
        self.slots[i]
    }

    /// Write slot `i`. Callers stay within `0..len()`.
    pub fn set(&mut self, i: usize, value: i64) {
        self.slots[i] = value;
    }

    /// Borrow all slots.
    pub fn as_slice(&self) -> &[i64] {
        &self.slots
    }

    /// Mutably borrow all slots.
    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.slots
    }
}
