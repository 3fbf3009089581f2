use super::scheduler::{select_min_by_key, Scheduler};
use crate::constants::Policy;
use crate::{Task, TimeStep};

/// Fixed priorities: the shorter the period, the higher the priority.
pub struct RateMonotonic;

impl Scheduler for RateMonotonic {
    fn policy(&self) -> Policy {
        Policy::RateMonotonic
    }

    fn select(&self, tasks: &[Task], _current_tick: TimeStep) -> Option<usize> {
        select_min_by_key(tasks, |task| task.period())
    }

    /// Liu & Layland bound `n (2^(1/n) - 1)`. Sufficient, not necessary.
    fn utilisation_bound(&self, n: usize) -> f64 {
        if n == 0 {
            return 1.0;
        }
        let n = n as f64;
        n * (2f64.powf(1.0 / n) - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(tasks: Vec<Task>) -> Vec<Task> {
        tasks
            .into_iter()
            .map(|mut t| {
                t.release(0);
                t
            })
            .collect()
    }

    #[test]
    fn test_picks_shortest_period() {
        let tasks = released(vec![Task::new(1, 5, 2, 5), Task::new(2, 4, 1, 4)]);
        assert_eq!(RateMonotonic.select(&tasks, 0), Some(1));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let tasks = released(vec![Task::new(1, 4, 1, 4), Task::new(2, 4, 2, 3)]);
        assert_eq!(RateMonotonic.select(&tasks, 0), Some(0));
    }

    #[test]
    fn test_skips_inactive_tasks() {
        let mut tasks = released(vec![Task::new(1, 4, 1, 4), Task::new(2, 5, 2, 5)]);
        tasks[0].execute();
        assert_eq!(RateMonotonic.select(&tasks, 1), Some(1));
    }

    #[test]
    fn test_idle_when_nothing_active() {
        let tasks = vec![Task::new(1, 4, 1, 4)];
        assert_eq!(RateMonotonic.select(&tasks, 0), None);
        assert_eq!(RateMonotonic.select(&[], 0), None);
    }

    #[test]
    fn test_bound() {
        assert_eq!(RateMonotonic.utilisation_bound(1), 1.0);
        let two = RateMonotonic.utilisation_bound(2);
        assert!((two - 2.0 * (2f64.sqrt() - 1.0)).abs() < 1e-12);
        assert_eq!(RateMonotonic.utilisation_bound(0), 1.0);
    }
}
