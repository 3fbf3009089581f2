use super::{TimeStep, ID};

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    id: ID,
    period: TimeStep,         // T_i : Period.
    wcet: TimeStep,           // C_i : Worst-case execution time.
    deadline: TimeStep,       // D_i : Relative deadline.
    remaining_time: TimeStep, // Execution left for the active job.
    next_deadline: TimeStep,  // Absolute deadline of the active job.
}

impl Task {
    pub fn new(id: ID, period: TimeStep, wcet: TimeStep, deadline: TimeStep) -> Self {
        Self {
            id,
            period,
            wcet,
            deadline,
            remaining_time: 0,
            next_deadline: 0,
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn period(&self) -> TimeStep {
        self.period
    }

    pub fn wcet(&self) -> TimeStep {
        self.wcet
    }

    pub fn deadline(&self) -> TimeStep {
        self.deadline
    }

    pub fn remaining_time(&self) -> TimeStep {
        self.remaining_time
    }

    pub fn next_deadline(&self) -> TimeStep {
        self.next_deadline
    }

    /// A task is active while its current job still has demand.
    pub fn is_active(&self) -> bool {
        self.remaining_time > 0
    }

    pub fn utilisation(&self) -> f64 {
        self.wcet as f64 / self.period as f64
    }

    pub fn is_release_time(&self, t: TimeStep) -> bool {
        t % self.period == 0
    }

    /// Starts a new job at `t`, abandoning whatever the previous job left.
    pub fn release(&mut self, t: TimeStep) {
        self.remaining_time = self.wcet;
        self.next_deadline = t.saturating_add(self.deadline);
    }

    /// Runs the active job for one tick.
    pub fn execute(&mut self) {
        debug_assert!(self.remaining_time > 0, "task {} has no demand", self.id);
        self.remaining_time = self.remaining_time.saturating_sub(1);
    }

    /// Back to the state before the first release.
    pub fn reset(&mut self) {
        self.remaining_time = 0;
        self.next_deadline = 0;
    }
}
