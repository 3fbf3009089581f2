use std::fmt;

use crate::TimeStep;

/// Longest simulation the driver accepts, in ticks.
pub const MAX_HORIZON: TimeStep = 1_000_000;

/// Scheduling policy under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    RateMonotonic,
    EarliestDeadlineFirst,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::RateMonotonic, Policy::EarliestDeadlineFirst];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RateMonotonic => write!(f, "RM"),
            Policy::EarliestDeadlineFirst => write!(f, "EDF"),
        }
    }
}

/// How far the simulation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Horizon {
    /// Least common multiple of all periods.
    #[default]
    Hyperperiod,
    /// Largest relative deadline.
    MaxDeadline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Log,
    None,
}

/// Outcome of testing a task set, also used as process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchedulingCode {
    SchedulableSimulated = 0,
    SchedulableShortcut = 1,
    UnschedulableSimulated = 2,
    UnschedulableShortcut = 3,
}
