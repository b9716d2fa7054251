//! Benefit amount type.
//!
//! Amounts are fixed-point integers in the smallest currency unit to avoid
//! floating-point errors. Entitlements and disbursed totals never go negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A benefit amount in the smallest currency unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BenefitAmount(u64);

impl BenefitAmount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for BenefitAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for BenefitAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for BenefitAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_arithmetic() {
        let a = BenefitAmount::new(100);
        let b = BenefitAmount::new(30);
        assert_eq!(a.checked_add(b), Some(BenefitAmount::new(130)));
        assert_eq!(a.checked_sub(b), Some(BenefitAmount::new(70)));
        assert_eq!(b.checked_sub(a), None);
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = BenefitAmount::new(10);
        let b = BenefitAmount::new(25);
        assert_eq!(a.saturating_sub(b), BenefitAmount::ZERO);
    }
}
