use crate::{Result, RosterError};

/// A closed interval `[low, high]` that a generated stat must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRange {
    low: u32,
    high: u32,
}

impl StatRange {
    pub const POINTS: StatRange = StatRange { low: 0, high: 40 };
    pub const ASSISTS: StatRange = StatRange { low: 0, high: 10 };
    pub const REBOUNDS: StatRange = StatRange { low: 0, high: 20 };

    /// Creates a range from inclusive bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::StatRange;
    ///
    /// let range = StatRange::new(0, 40).unwrap();
    /// assert_eq!(range, StatRange::POINTS);
    /// assert!(StatRange::new(5, 1).is_err());
    /// ```
    pub fn new(low: u32, high: u32) -> Result<Self> {
        if low > high {
            return Err(RosterError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Number of distinct values in the range, used as the modulus when
    /// reducing a raw random value into it. Widened so the full `u32`
    /// domain does not overflow.
    pub fn span(&self) -> u64 {
        u64::from(self.high - self.low) + 1
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ranges() {
        assert_eq!((StatRange::POINTS.low(), StatRange::POINTS.high()), (0, 40));
        assert_eq!((StatRange::ASSISTS.low(), StatRange::ASSISTS.high()), (0, 10));
        assert_eq!(
            (StatRange::REBOUNDS.low(), StatRange::REBOUNDS.high()),
            (0, 20)
        );
    }

    #[test]
    fn test_span_is_inclusive() {
        assert_eq!(StatRange::POINTS.span(), 41);
        assert_eq!(StatRange::ASSISTS.span(), 11);
        assert_eq!(StatRange::REBOUNDS.span(), 21);
        assert_eq!(StatRange::new(7, 7).unwrap().span(), 1);
    }

    #[test]
    fn test_span_covers_full_domain() {
        let range = StatRange::new(0, u32::MAX).unwrap();
        assert_eq!(range.span(), 1 << 32);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert_eq!(
            StatRange::new(10, 3),
            Err(RosterError::InvalidRange { low: 10, high: 3 })
        );
    }

    #[test]
    fn test_contains_boundaries() {
        let range = StatRange::REBOUNDS;
        assert!(range.contains(0));
        assert!(range.contains(20));
        assert!(!range.contains(21));

        let shifted = StatRange::new(5, 9).unwrap();
        assert!(!shifted.contains(4));
        assert!(shifted.contains(5));
        assert!(shifted.contains(9));
        assert!(!shifted.contains(10));
    }
}
