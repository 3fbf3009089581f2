use crate::constants::Policy;

use super::TimeStep;

/// A job that still had demand when its deadline passed or when the next
/// release overwrote it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeadlineMiss {
    task: usize,          // Index of the task in its set
    deadline: TimeStep,   // Absolute deadline of the missed job
    remaining: TimeStep,  // Demand left unserved
}

impl DeadlineMiss {
    pub fn new(task: usize, deadline: TimeStep, remaining: TimeStep) -> Self {
        Self { task, deadline, remaining }
    }

    pub fn task(&self) -> usize {
        self.task
    }

    pub fn deadline(&self) -> TimeStep {
        self.deadline
    }

    pub fn remaining(&self) -> TimeStep {
        self.remaining
    }
}

/// Result of one simulation run: which task (if any) ran at each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleRecord {
    policy: Policy,
    num_tasks: usize,
    slots: Vec<Option<usize>>,
    misses: Vec<DeadlineMiss>,
}

impl ScheduleRecord {
    pub fn new(policy: Policy, num_tasks: usize, end_time: TimeStep) -> Self {
        Self {
            policy,
            num_tasks,
            slots: Vec::with_capacity(end_time),
            misses: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, elected: Option<usize>) {
        self.slots.push(elected);
    }

    pub(crate) fn record_misses(&mut self, misses: Vec<DeadlineMiss>) {
        self.misses.extend(misses);
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Number of simulated ticks.
    pub fn end_time(&self) -> TimeStep {
        self.slots.len()
    }

    /// Task that ran at `tick`, `None` when idle or out of range.
    pub fn at(&self, tick: TimeStep) -> Option<usize> {
        self.slots.get(tick).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    pub fn ran(&self, task: usize, tick: TimeStep) -> bool {
        self.at(tick) == Some(task)
    }

    /// Task × tick occupancy, flattened as `tick * num_tasks + task`.
    pub fn occupancy(&self) -> Vec<bool> {
        let mut table = vec![false; self.slots.len() * self.num_tasks];
        for (tick, slot) in self.slots.iter().enumerate() {
            if let Some(task) = slot {
                table[tick * self.num_tasks + task] = true;
            }
        }
        table
    }

    pub fn ticks_run(&self, task: usize) -> usize {
        self.slots.iter().filter(|slot| **slot == Some(task)).count()
    }

    pub fn idle_ticks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn misses(&self) -> &[DeadlineMiss] {
        &self.misses
    }

    pub fn has_misses(&self) -> bool {
        !self.misses.is_empty()
    }
}
