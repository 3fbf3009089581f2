use crate::models::TimeStep;
use gcd::Gcd;

/// Least common multiple of two values, `None` on overflow.
fn lcm(a: TimeStep, b: TimeStep) -> Option<TimeStep> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / a.gcd(b)).checked_mul(b)
}

/// Least common multiple of a set of values, reduced pairwise.
///
/// Returns `Some(0)` for an empty set and `None` if an intermediate
/// result does not fit in a `TimeStep`.
pub fn multiple_lcm(numbers: &[TimeStep]) -> Option<TimeStep> {
    if numbers.is_empty() {
        return Some(0);
    }
    numbers.iter().try_fold(1, |acc, &x| lcm(acc, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcm_of_periods() {
        assert_eq!(multiple_lcm(&[4, 5]), Some(20));
        assert_eq!(multiple_lcm(&[2, 3, 4]), Some(12));
        assert_eq!(multiple_lcm(&[7]), Some(7));
    }

    #[test]
    fn test_lcm_is_order_independent() {
        assert_eq!(multiple_lcm(&[6, 10, 15]), multiple_lcm(&[15, 6, 10]));
    }

    #[test]
    fn test_lcm_empty() {
        assert_eq!(multiple_lcm(&[]), Some(0));
    }

    #[test]
    fn test_lcm_overflow() {
        assert_eq!(multiple_lcm(&[TimeStep::MAX, TimeStep::MAX - 1]), None);
    }
}
