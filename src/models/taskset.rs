use crate::constants::{Horizon, MAX_HORIZON};
use crate::errors::SchedulingError;
use crate::lcm::multiple_lcm;

use super::{DeadlineMiss, Task, TimeStep};

/// An ordered, validated set of periodic tasks.
///
/// Indices are stable for the lifetime of the set; only the runtime
/// fields of each task change during a simulation.
#[derive(Clone, Debug, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Builds a task set, rejecting the first task with invalid parameters.
    pub fn new(tasks: Vec<Task>) -> Result<Self, SchedulingError> {
        for task in tasks.iter() {
            if task.period() == 0 {
                return Err(SchedulingError::InvalidPeriod { task: task.id() });
            }
            if task.wcet() == 0 {
                return Err(SchedulingError::InvalidExecutionTime { task: task.id() });
            }
            if task.wcet() > task.period() {
                return Err(SchedulingError::ExecutionExceedsPeriod {
                    task: task.id(),
                    wcet: task.wcet(),
                    period: task.period(),
                });
            }
            if task.deadline() == 0 {
                return Err(SchedulingError::InvalidDeadline { task: task.id() });
            }
        }
        Ok(Self { tasks })
    }

    pub fn new_empty() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get_task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn utilisation(&self) -> f64 {
        self.tasks.iter().map(|t| t.utilisation()).sum()
    }

    /// Number of ticks the simulation covers under the given horizon policy.
    ///
    /// Horizons longer than `MAX_HORIZON` are rejected.
    pub fn horizon(&self, horizon: Horizon) -> Result<TimeStep, SchedulingError> {
        let end_time = match horizon {
            Horizon::Hyperperiod => self.hyperperiod()?,
            Horizon::MaxDeadline => self.tasks.iter().map(|t| t.deadline()).max().unwrap_or(0),
        };
        if end_time > MAX_HORIZON {
            return Err(SchedulingError::HorizonTooLarge { horizon: end_time, limit: MAX_HORIZON });
        }
        Ok(end_time)
    }

    pub fn hyperperiod(&self) -> Result<TimeStep, SchedulingError> {
        let periods: Vec<TimeStep> = self.tasks.iter().map(|t| t.period()).collect();
        multiple_lcm(&periods).ok_or(SchedulingError::HorizonOverflow)
    }

    /// Jobs still running whose absolute deadline is exactly `t`.
    pub fn expired_jobs(&self, t: TimeStep) -> Vec<DeadlineMiss> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.is_active() && task.next_deadline() == t)
            .map(|(index, task)| DeadlineMiss::new(index, task.next_deadline(), task.remaining_time()))
            .collect()
    }

    /// Jobs that a release at `t` would abandon before their deadline.
    pub fn abandoned_jobs(&self, t: TimeStep) -> Vec<DeadlineMiss> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| {
                task.is_release_time(t) && task.is_active() && task.next_deadline() > t
            })
            .map(|(index, task)| DeadlineMiss::new(index, task.next_deadline(), task.remaining_time()))
            .collect()
    }

    /// Releases a new job for every task whose period boundary falls on `t`.
    ///
    /// Returns the indices of the released tasks.
    pub fn release_jobs(&mut self, t: TimeStep) -> Vec<usize> {
        self.tasks
            .iter_mut()
            .enumerate()
            .filter(|(_, task)| task.is_release_time(t))
            .map(|(index, task)| {
                task.release(t);
                index
            })
            .collect()
    }

    /// Runs the task at `index` for one tick.
    pub fn execute(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.execute();
        }
    }

    /// Clears all runtime state so the set can be simulated again.
    pub fn reset(&mut self) {
        self.tasks.iter_mut().for_each(Task::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tasks() -> TaskSet {
        TaskSet::new(vec![Task::new(1, 4, 1, 4), Task::new(2, 5, 2, 5)]).unwrap()
    }

    #[test]
    fn test_rejects_zero_period() {
        let result = TaskSet::new(vec![Task::new(1, 4, 1, 4), Task::new(2, 0, 1, 3)]);
        assert_eq!(result.unwrap_err(), SchedulingError::InvalidPeriod { task: 2 });
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert_eq!(
            TaskSet::new(vec![Task::new(1, 4, 0, 4)]).unwrap_err(),
            SchedulingError::InvalidExecutionTime { task: 1 }
        );
        assert_eq!(
            TaskSet::new(vec![Task::new(1, 4, 5, 4)]).unwrap_err(),
            SchedulingError::ExecutionExceedsPeriod { task: 1, wcet: 5, period: 4 }
        );
        assert_eq!(
            TaskSet::new(vec![Task::new(1, 4, 1, 0)]).unwrap_err(),
            SchedulingError::InvalidDeadline { task: 1 }
        );
    }

    #[test]
    fn test_empty_set_is_valid() {
        let taskset = TaskSet::new(Vec::new()).unwrap();
        assert!(taskset.is_empty());
        assert_eq!(taskset.horizon(Horizon::Hyperperiod), Ok(0));
        assert_eq!(taskset.horizon(Horizon::MaxDeadline), Ok(0));
        assert_eq!(taskset.utilisation(), 0.0);
    }

    #[test]
    fn test_horizons() {
        let taskset = TaskSet::new(vec![Task::new(1, 4, 1, 3), Task::new(2, 6, 2, 5)]).unwrap();
        assert_eq!(taskset.horizon(Horizon::Hyperperiod), Ok(12));
        assert_eq!(taskset.horizon(Horizon::MaxDeadline), Ok(5));
    }

    #[test]
    fn test_horizon_overflow() {
        let taskset = TaskSet::new(vec![
            Task::new(1, TimeStep::MAX, 1, 1),
            Task::new(2, TimeStep::MAX - 1, 1, 1),
        ])
        .unwrap();
        assert_eq!(taskset.hyperperiod(), Err(SchedulingError::HorizonOverflow));
    }

    #[test]
    fn test_horizon_too_large() {
        let taskset = TaskSet::new(vec![
            Task::new(1, 999983, 1, 999983),
            Task::new(2, 999979, 1, 999979),
            Task::new(3, 999961, 1, 999961),
        ])
        .unwrap();
        assert!(matches!(
            taskset.horizon(Horizon::Hyperperiod),
            Err(SchedulingError::HorizonTooLarge { limit: MAX_HORIZON, .. })
                | Err(SchedulingError::HorizonOverflow)
        ));
        assert_eq!(taskset.horizon(Horizon::MaxDeadline), Ok(999983));
    }

    #[test]
    fn test_release_jobs() {
        let mut taskset = two_tasks();
        assert_eq!(taskset.release_jobs(0), vec![0, 1]);
        assert_eq!(taskset.release_jobs(4), vec![0]);
        assert_eq!(taskset.release_jobs(5), vec![1]);
        assert!(taskset.release_jobs(7).is_empty());
        assert_eq!(taskset.get_task(1).unwrap().next_deadline(), 10);
    }

    #[test]
    fn test_expired_and_abandoned_jobs() {
        let mut taskset = TaskSet::new(vec![Task::new(1, 4, 2, 6), Task::new(2, 5, 2, 3)]).unwrap();
        taskset.release_jobs(0);

        let expired = taskset.expired_jobs(3);
        assert_eq!(expired, vec![DeadlineMiss::new(1, 3, 2)]);

        // Task 1 is released again at 4 while its deadline (6) is still ahead.
        let abandoned = taskset.abandoned_jobs(4);
        assert_eq!(abandoned, vec![DeadlineMiss::new(0, 6, 2)]);
    }

    #[test]
    fn test_reset() {
        let mut taskset = two_tasks();
        taskset.release_jobs(0);
        taskset.execute(1);
        taskset.reset();
        assert!(taskset.iter().all(|t| t.remaining_time() == 0 && t.next_deadline() == 0));
    }
}
