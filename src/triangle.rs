//! Validated triangles with perimeter, area and kind.
//!
//! A [`Triangle`] is built from three side lengths where the first side is
//! the longest. Construction checks this ordering and the strict triangle
//! inequality, so every live `Triangle` is non-degenerate.
//!
//! # Examples
//!
//! ```
//! use podium_lab::{Triangle, TriangleKind};
//!
//! let t = Triangle::try_new(2.0, 2.0, 1.0).unwrap();
//! assert_eq!(t.perimeter(), 5.0);
//! assert_eq!(t.kind(), TriangleKind::Isosceles);
//!
//! // The first side must be the longest.
//! assert!(Triangle::try_new(1.0, 5.0, 5.0).is_err());
//! ```

use crate::error::{Error, Result};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Which pairs of sides are equal.
    ///
    /// `AB` compares the first and second side, `BC` the second and third,
    /// `CA` the third and first.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct EqualSides: u8 {
        const AB = 0b001;
        const BC = 0b010;
        const CA = 0b100;
    }
}

/// Classification of a triangle by its equal sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriangleKind {
    /// All three sides equal.
    Equilateral,
    /// Exactly two sides equal.
    Isosceles,
    /// No two sides equal.
    Scalene,
}

impl TriangleKind {
    /// Classify from the set of equal side pairs.
    ///
    /// Two pairs can only be reported under a non-zero tolerance; equality is
    /// then not transitive and the triangle is treated as equilateral.
    #[must_use]
    pub const fn from_equal_sides(pairs: EqualSides) -> Self {
        match pairs.bits().count_ones() {
            0 => Self::Scalene,
            1 => Self::Isosceles,
            _ => Self::Equilateral,
        }
    }

    /// Lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equilateral => "equilateral",
            Self::Isosceles => "isosceles",
            Self::Scalene => "scalene",
        }
    }
}

impl fmt::Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for comparing side lengths.
///
/// The default compares sides exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClassifyOptions {
    /// Absolute difference under which two lengths count as equal.
    pub tolerance: f64,
}

impl ClassifyOptions {
    /// Exact comparison.
    pub const EXACT: Self = Self { tolerance: 0.0 };

    /// Return options with the given tolerance.
    ///
    /// Negative or NaN tolerances fall back to exact comparison.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
        self
    }

    fn same(self, x: f64, y: f64) -> bool {
        if self.tolerance > 0.0 {
            (x - y).abs() <= self.tolerance
        } else {
            x == y
        }
    }
}

/// A non-degenerate triangle whose first side is the longest.
///
/// Immutable once built. Use [`Triangle::try_new`] to get an error back, or
/// [`Triangle::new`] when invalid sides are a bug in the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Build a triangle, checking its preconditions.
    ///
    /// Checks run in order: every side finite, first side longest, then
    /// `a < b + c`. Non-positive sides always fail one of the last two.
    pub fn try_new(a: f64, b: f64, c: f64) -> Result<Self> {
        for (position, value) in [a, b, c].into_iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::NonFiniteSide { position, value });
            }
        }
        if a < b || a < c {
            return Err(Error::FirstSideNotLongest {
                first: a,
                second: b,
                third: c,
            });
        }
        if a >= b + c {
            return Err(Error::TriangleInequality {
                first: a,
                second: b,
                third: c,
            });
        }
        Ok(Self { a, b, c })
    }

    /// Build a triangle, treating invalid sides as a caller bug.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error`] message from [`Triangle::try_new`], e.g.
    /// `"First side is not the longest"` or
    /// `"Does not satisfy triangle inequality"`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        match Self::try_new(a, b, c) {
            Ok(t) => t,
            Err(e) => panic!("{e}"),
        }
    }

    /// The three sides in construction order.
    #[must_use]
    pub const fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// The longest side, which is always the first.
    #[must_use]
    pub const fn longest(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    /// Area by Heron's formula, in Kahan's stable ordering.
    ///
    /// With sides `a >= b >= c`,
    /// `sqrt((a+(b+c))(c-(a-b))(c+(a-b))(a+(b-c))) / 4`, keeping the
    /// parentheses exactly as written. Sides are scaled by the longest one
    /// first so the sums cannot overflow. The result is still infinite when
    /// the area exceeds `f64::MAX`.
    #[must_use]
    pub fn area(&self) -> f64 {
        let (mid, short) = if self.b >= self.c {
            (self.b, self.c)
        } else {
            (self.c, self.b)
        };
        let x = mid / self.a;
        let y = short / self.a;
        let radicand = (1.0 + (x + y)) * (y - (1.0 - x)) * (y + (1.0 - x)) * (1.0 + (x - y));
        // Rounding can push near-degenerate triangles slightly below zero.
        radicand.max(0.0).sqrt() / 4.0 * self.a * self.a
    }

    /// Pairs of sides that are exactly equal.
    #[must_use]
    pub fn equal_sides(&self) -> EqualSides {
        self.equal_sides_with(ClassifyOptions::EXACT)
    }

    /// Pairs of sides equal under `options`.
    #[must_use]
    pub fn equal_sides_with(&self, options: ClassifyOptions) -> EqualSides {
        let mut pairs = EqualSides::empty();
        pairs.set(EqualSides::AB, options.same(self.a, self.b));
        pairs.set(EqualSides::BC, options.same(self.b, self.c));
        pairs.set(EqualSides::CA, options.same(self.c, self.a));
        pairs
    }

    /// Kind by exact side comparison.
    #[must_use]
    pub fn kind(&self) -> TriangleKind {
        TriangleKind::from_equal_sides(self.equal_sides())
    }

    #[must_use]
    pub fn kind_with(&self, options: ClassifyOptions) -> TriangleKind {
        TriangleKind::from_equal_sides(self.equal_sides_with(options))
    }

    /// Whether the triangle has a right angle opposite the first side.
    ///
    /// The squares are compared under the tolerance in `options`.
    #[must_use]
    pub fn is_right(&self, options: ClassifyOptions) -> bool {
        options.same(self.a * self.a, self.b * self.b + self.c * self.c)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} triangle ({}, {}, {})",
            self.kind(),
            self.a,
            self.b,
            self.c
        )
    }
}
