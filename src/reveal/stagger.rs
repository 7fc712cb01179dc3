//! Cascading delay assignment for child sequences.

use std::time::Duration;

/// Delay for the child at `index`: `base + index * increment`.
pub fn delay_for(base: Duration, increment: Duration, index: usize) -> Duration {
    base + increment * index as u32
}

/// The full delay sequence for `count` children, in declared order.
/// Strictly increasing whenever `increment` is non-zero.
pub fn stagger(base: Duration, increment: Duration, count: usize) -> Vec<Duration> {
    (0..count).map(|i| delay_for(base, increment, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_are_strictly_increasing() {
        let delays = stagger(Duration::from_millis(200), Duration::from_millis(200), 6);
        assert_eq!(delays.len(), 6);
        for pair in delays.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn base_offsets_every_delay() {
        let delays = stagger(Duration::from_millis(500), Duration::from_millis(100), 3);
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(500),
                Duration::from_millis(600),
                Duration::from_millis(700),
            ]
        );
    }

    #[test]
    fn zero_increment_repeats_base() {
        let delays = stagger(Duration::from_millis(300), Duration::ZERO, 4);
        assert!(delays.iter().all(|d| *d == Duration::from_millis(300)));
    }

    #[test]
    fn empty_sequence() {
        assert!(stagger(Duration::ZERO, Duration::from_millis(100), 0).is_empty());
    }
}
