#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;

use serde::{Deserialize, Serialize};

/// An immutable 2D vector in either screen or world space.
///
/// Every operation returns a new value; operands are never mutated. All
/// arithmetic is componentwise except [`Vector::len`] and
/// [`Vector::normalize`], which use the Euclidean magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// The zero vector (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// Unit vector pointing up in screen coordinates (0, -1).
    pub const UP: Self = Self { x: 0.0, y: -1.0 };
    /// Unit vector pointing down in screen coordinates (0, 1).
    pub const DOWN: Self = Self { x: 0.0, y: 1.0 };
    /// Unit vector pointing left (-1, 0).
    pub const LEFT: Self = Self { x: -1.0, y: 0.0 };
    /// Unit vector pointing right (1, 0).
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both components are exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Whether either component is NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Componentwise sum.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Componentwise difference.
    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Componentwise product.
    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Componentwise quotient.
    #[must_use]
    pub fn div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    /// Scale both components by a scalar.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Flip the sign of both components.
    #[must_use]
    pub fn invert(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Flip the sign of the x component only.
    #[must_use]
    pub fn invert_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Flip the sign of the y component only.
    #[must_use]
    pub fn invert_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Euclidean magnitude.
    #[must_use]
    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. The zero vector normalizes to NaN
    /// components, matching plain division by a zero length.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.len();
        Self::new(self.x / len, self.y / len)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vector::add(self, other)
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector::sub(self, other)
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}
