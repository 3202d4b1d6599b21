//! # Cycle Budget
//!
//! Every primitive memory access charges the budget of the current `execute`
//! call. The counter is signed: an instruction always runs to completion once
//! dispatched, so the final value may drop below zero.

/// Signed allowance of primitive operations for a single execution call.
///
/// # Examples
///
/// ```
/// use mini6502::Budget;
///
/// let mut budget = Budget::new(2);
/// budget.spend(3);
/// assert_eq!(budget.remaining(), -1);
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    remaining: i64,
}

impl Budget {
    /// Creates a budget holding `cycles` units.
    pub fn new(cycles: i64) -> Self {
        Self { remaining: cycles }
    }

    /// Charges `units` against the budget.
    pub fn spend(&mut self, units: i64) {
        self.remaining -= units;
    }

    /// Units left; negative once an instruction has overshot.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// True when no further instruction may be dispatched.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_decrements() {
        let mut budget = Budget::new(5);
        budget.spend(1);
        budget.spend(2);
        assert_eq!(budget.remaining(), 2);
        assert!(!budget.is_exhausted());
    }

    #[test]
    fn test_zero_and_negative_are_exhausted() {
        assert!(Budget::new(0).is_exhausted());
        assert!(Budget::new(-4).is_exhausted());
        assert!(!Budget::new(1).is_exhausted());
    }
}
