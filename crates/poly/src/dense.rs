//! The dense polynomial value type.

use crate::coeffs::CoeffBuffer;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// A dense univariate polynomial with `i64` coefficients.
///
/// Slot `i` of the backing buffer holds the coefficient of `x^i`. The
/// tracked degree is the highest exponent with a defined slot; slots above
/// it are zero. The zero polynomial is degree 0 with coefficient 0, never
/// an empty structure.
///
/// Capacity (the buffer length) is at least `degree + 1` and only ever
/// grows, so repeated coefficient insertions at increasing exponents
/// amortize their allocations.
///
/// Coefficient arithmetic is native `i64` arithmetic; overflow is not
/// checked.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Debug)]
pub struct Polynomial {
    pub(crate) coeffs: CoeffBuffer,
    pub(crate) degree: usize,
}

impl Polynomial {
    /// The zero polynomial: degree 0, coefficient 0.
    pub fn new() -> Self {
        Polynomial {
            coeffs: CoeffBuffer::zeroed(1),
            degree: 0,
        }
    }

    /// The linear polynomial `coefficient * x`.
    pub fn linear(coefficient: i64) -> Self {
        Self::term(coefficient, 1)
    }

    /// The single-term polynomial `coefficient * x^power`.
    ///
    /// A negative `power` follows the [`set_coeff`](Self::set_coeff)
    /// coercion policy.
    pub fn term(coefficient: i64, power: i64) -> Self {
        let mut p = Self::new();
        p.set_coeff(coefficient, power);
        p
    }

    /// Highest exponent with a defined coefficient slot.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Current allocated length of the backing storage.
    pub fn capacity(&self) -> usize {
        self.coeffs.len()
    }

    /// The coefficient of `x^power`.
    ///
    /// Exponents outside `0..=degree` read as zero; this never fails.
    pub fn coeff(&self, power: i64) -> i64 {
        if power < 0 || power as usize > self.degree {
            return 0;
        }
        self.coeffs.get(power as usize)
    }

    /// Set the coefficient of `x^power`, growing storage as needed.
    ///
    /// A negative `power` is coerced to `(coefficient = 0, power = 1)`:
    /// negative exponents are rejected by zeroing the value and
    /// normalizing the exponent to 1, not by failing. Returns `true` in
    /// every case (the operation cannot fail).
    pub fn set_coeff(&mut self, coefficient: i64, power: i64) -> bool {
        let (coefficient, power) = if power < 0 {
            (0, 1)
        } else {
            (coefficient, power as usize)
        };

        if power > self.degree {
            self.coeffs.grow(power + 1);
            self.degree = power;
        }
        self.coeffs.set(power, coefficient);

        true
    }

    /// True if every tracked coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs().iter().all(|&c| c == 0)
    }

    /// The coefficient at the tracked degree. May be zero when the
    /// polynomial carries trailing zero terms.
    pub fn leading_coeff(&self) -> i64 {
        self.coeffs.get(self.degree)
    }

    /// The coefficients for exponents `0..=degree`, in ascending order.
    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs.as_slice()[..=self.degree]
    }

    /// Evaluate at `x` using Horner's method.
    pub fn eval(&self, x: i64) -> i64 {
        let mut acc = 0;
        for &c in self.coeffs().iter().rev() {
            acc = acc * x + c;
        }
        acc
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Polynomial {
    /// Deep copy; the clone's capacity matches the source's capacity.
    fn clone(&self) -> Self {
        Polynomial {
            coeffs: self.coeffs.clone(),
            degree: self.degree,
        }
    }

    /// Overwrite `self` with `source`'s value, reusing the existing
    /// allocation when it is large enough and growing it when it is not.
    ///
    /// Unlike the clone, the target's capacity is left as-is (it may
    /// exceed the source's); coefficient contents are always overwritten.
    fn clone_from(&mut self, source: &Self) {
        self.coeffs.grow(source.degree + 1);
        let tracked = source.degree + 1;
        self.coeffs.as_mut_slice()[..tracked].copy_from_slice(&source.coeffs.as_slice()[..tracked]);
        for slot in self.coeffs.as_mut_slice()[tracked..].iter_mut() {
            *slot = 0;
        }
        self.degree = source.degree;
    }
}

/// Value equality over the logically significant coefficient range.
///
/// Two polynomials are equal iff every exponent carries the same
/// coefficient, with slots beyond a value's tracked degree reading as
/// zero. Backing capacity and explicitly stored trailing zeros never
/// affect the comparison, so values built through different growth paths
/// compare equal term-by-term.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        let top = self.degree.max(other.degree);
        (0..=top as i64).all(|power| self.coeff(power) == other.coeff(power))
    }
}

impl Eq for Polynomial {}
