use thiserror::Error;

use crate::models::{TimeStep, ID};

/// Configuration errors detected before a simulation starts.
#[derive(Debug, Error, PartialEq)]
pub enum SchedulingError {
    #[error("task {task}: period must be positive")]
    InvalidPeriod { task: ID },

    #[error("task {task}: execution time must be positive")]
    InvalidExecutionTime { task: ID },

    #[error("task {task}: execution time {wcet} exceeds period {period}")]
    ExecutionExceedsPeriod { task: ID, wcet: TimeStep, period: TimeStep },

    #[error("task {task}: deadline must be positive")]
    InvalidDeadline { task: ID },

    #[error("simulation horizon does not fit in {} bits (try --horizon max-deadline)", TimeStep::BITS)]
    HorizonOverflow,

    #[error("simulation horizon of {horizon} ticks exceeds the limit of {limit} (try --horizon max-deadline)")]
    HorizonTooLarge { horizon: TimeStep, limit: TimeStep },
}
