//! Opening stock carried into a month.

use super::types::StockDelta;

/// Signed running total of `deltas`: inflows add, outflows subtract.
///
/// The subtype never matters here, and an empty history yields zero. Callers
/// must pass every movement dated before the month, not just the previous
/// month, so stock survives any number of empty months.
#[must_use]
pub fn carry_over<I>(deltas: I) -> i64
where
    I: IntoIterator<Item = StockDelta>,
{
    deltas.into_iter().map(StockDelta::signed_units).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::MovementType;

    fn delta(movement_type: MovementType, units: i32) -> StockDelta {
        StockDelta {
            movement_type,
            units,
        }
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(carry_over(Vec::new()), 0);
    }

    #[test]
    fn test_signed_sum() {
        let deltas = vec![
            delta(MovementType::In, 100),
            delta(MovementType::Out, 30),
            delta(MovementType::In, 5),
            delta(MovementType::Out, 80),
        ];
        assert_eq!(carry_over(deltas), -5);
    }

    #[test]
    fn test_large_history_does_not_overflow_i32() {
        let deltas = std::iter::repeat_n(delta(MovementType::In, i32::MAX), 4);
        assert_eq!(carry_over(deltas), 4 * i64::from(i32::MAX));
    }
}
