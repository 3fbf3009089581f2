use super::scheduler::{select_min_by_key, Scheduler};
use crate::constants::Policy;
use crate::{Task, TimeStep};

/// Dynamic priorities: the nearest absolute deadline runs first.
pub struct EarliestDeadlineFirst;

impl Scheduler for EarliestDeadlineFirst {
    fn policy(&self) -> Policy {
        Policy::EarliestDeadlineFirst
    }

    fn select(&self, tasks: &[Task], _current_tick: TimeStep) -> Option<usize> {
        select_min_by_key(tasks, |task| task.next_deadline())
    }

    fn utilisation_bound(&self, _n: usize) -> f64 {
        1.0
    }
}
