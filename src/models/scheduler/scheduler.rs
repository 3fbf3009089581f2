use crate::constants::Policy;
use crate::{Task, TimeStep};

/// A uniprocessor scheduling policy.
///
/// `select` only reads task state; the driver applies the decision.
pub trait Scheduler {
    fn policy(&self) -> Policy;

    /// Index of the task to run at `current_tick`, or `None` when idle.
    fn select(&self, tasks: &[Task], current_tick: TimeStep) -> Option<usize>;

    /// Utilisation bound of the closed-form test for `n` tasks.
    fn utilisation_bound(&self, n: usize) -> f64;
}

/// Picks the active task minimising `key`, the lowest index winning ties.
pub(crate) fn select_min_by_key<K, F>(tasks: &[Task], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Task) -> K,
{
    let mut elected: Option<(usize, K)> = None;

    for (index, task) in tasks.iter().enumerate() {
        if !task.is_active() {
            continue;
        }
        let current = key(task);
        let better = match &elected {
            Some((_, best)) => current < *best,
            None => true,
        };
        if better {
            elected = Some((index, current));
        }
    }

    elected.map(|(index, _)| index)
}

/// Returns the scheduler implementing `policy`.
pub fn for_policy(policy: Policy) -> &'static dyn Scheduler {
    match policy {
        Policy::RateMonotonic => &super::RateMonotonic,
        Policy::EarliestDeadlineFirst => &super::EarliestDeadlineFirst,
    }
}
