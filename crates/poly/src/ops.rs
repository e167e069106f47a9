//! Operator trait impls for [`Polynomial`].
//!
//! The compound operators (`+=`, `-=`, `*=`) carry the arithmetic; the
//! binary forms clone the left operand and delegate. Negation is
//! value-returning through [`Neg`]; the in-place form the binary
//! operators build on is exposed as
//! [`negate_in_place`](Polynomial::negate_in_place).

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::coeffs::CoeffBuffer;
use crate::dense::Polynomial;

impl Polynomial {
    /// Negate every tracked coefficient in place.
    pub fn negate_in_place(&mut self) {
        for c in self.coeffs.as_mut_slice()[..=self.degree].iter_mut() {
            *c = -*c;
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        self.negate_in_place();
        self
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let mut out = self.clone();
        out.negate_in_place();
        out
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    /// Add aligned coefficients over `0..=rhs.degree`.
    ///
    /// Grows storage to `rhs.degree + 1` when the right operand does not
    /// fit (old slots preserved, new region zero-filled); higher-order
    /// coefficients of `self`, if any, are untouched. The resulting
    /// degree is the maximum of the two operand degrees.
    fn add_assign(&mut self, rhs: &Polynomial) {
        self.coeffs.grow(rhs.degree + 1);
        if rhs.degree > self.degree {
            self.degree = rhs.degree;
        }
        for i in 0..=rhs.degree {
            let sum = self.coeffs.get(i) + rhs.coeffs.get(i);
            self.coeffs.set(i, sum);
        }
    }
}

impl AddAssign for Polynomial {
    fn add_assign(&mut self, rhs: Polynomial) {
        *self += &rhs;
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    /// Subtract aligned coefficients over `0..=rhs.degree`; the extended
    /// region, when growth happens, ends up holding the negated right
    /// operand. Degree and growth rules match [`AddAssign`].
    fn sub_assign(&mut self, rhs: &Polynomial) {
        self.coeffs.grow(rhs.degree + 1);
        if rhs.degree > self.degree {
            self.degree = rhs.degree;
        }
        for i in 0..=rhs.degree {
            let diff = self.coeffs.get(i) - rhs.coeffs.get(i);
            self.coeffs.set(i, diff);
        }
    }
}

impl SubAssign for Polynomial {
    fn sub_assign(&mut self, rhs: Polynomial) {
        *self -= &rhs;
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    /// Full convolution of the two coefficient sequences.
    ///
    /// Accumulates every `left[i] * right[j]` product into a fresh
    /// zero-seeded buffer at slot `i + j`, and commits that buffer to
    /// `self` only after the double loop completes. Writing into either
    /// operand would let an early write feed a later product, so the
    /// result buffer is a distinct owned local; the borrow rules already
    /// keep `rhs` from aliasing `self`. Result degree is the sum of the
    /// operand degrees, and capacity never drops below its prior value.
    fn mul_assign(&mut self, rhs: &Polynomial) {
        let out_degree = self.degree + rhs.degree;
        let mut out = CoeffBuffer::zeroed(self.coeffs.len().max(out_degree + 1));

        for i in 0..=self.degree {
            for j in 0..=rhs.degree {
                let acc = out.get(i + j) + self.coeffs.get(i) * rhs.coeffs.get(j);
                out.set(i + j, acc);
            }
        }

        self.coeffs = out;
        self.degree = out_degree;
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self *= &rhs;
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Polynomial) -> Polynomial {
        self += &rhs;
        self
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: &Polynomial) -> Polynomial {
        self += rhs;
        self
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(mut self, rhs: Polynomial) -> Polynomial {
        self -= &rhs;
        self
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn sub(mut self, rhs: &Polynomial) -> Polynomial {
        self -= rhs;
        self
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(mut self, rhs: Polynomial) -> Polynomial {
        self *= &rhs;
        self
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Polynomial;

    fn mul(mut self, rhs: &Polynomial) -> Polynomial {
        self *= rhs;
        self
    }
}
