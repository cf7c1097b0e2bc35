use std::ops::{Add, Mul};

/// Floating point type used for every complex-plane coordinate.
///
/// `f64` is the widest portable float; scores of pixels sitting on the set
/// boundary are precision-sensitive, so the type is never mixed with `f32`.
pub type Real = f64;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: Real,
    pub imag: Real,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: Real, imag: Real) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> Real {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl From<(Real, Real)> for Complex {
    fn from((real, imag): (Real, Real)) -> Self {
        Self { real, imag }
    }
}
