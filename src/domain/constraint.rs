//! Linear constraint types for selection problems.
//!
//! Every selection problem has one binary variable per candidate player, so
//! most constraints are counts over a subset of variables. The helpers here
//! build those rows without callers juggling dense coefficient vectors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub const fn geq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub const fn leq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub const fn eq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Count of selected variables among those where `member[i]` holds.
    ///
    /// `sense` compares that count against `rhs`.
    #[must_use]
    pub fn count(member: &[bool], sense: ConstraintSense, rhs: u32) -> Self {
        let coefficients = member
            .iter()
            .map(|&m| if m { Decimal::ONE } else { Decimal::ZERO })
            .collect();
        Self {
            coefficients,
            sense,
            rhs: Decimal::from(rhs),
        }
    }

    /// Weighted sum of all variables compared against `rhs`.
    #[must_use]
    pub fn weighted(weights: Vec<Decimal>, sense: ConstraintSense, rhs: Decimal) -> Self {
        Self {
            coefficients: weights,
            sense,
            rhs,
        }
    }

    /// Evaluate the left-hand side at `values`.
    #[must_use]
    pub fn lhs(&self, values: &[Decimal]) -> Decimal {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, v)| *c * *v)
            .sum()
    }

    /// Whether `values` satisfy this constraint within `tolerance`.
    #[must_use]
    pub fn is_satisfied(&self, values: &[Decimal], tolerance: Decimal) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs >= self.rhs - tolerance,
            ConstraintSense::LessEqual => lhs <= self.rhs + tolerance,
            ConstraintSense::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}
