//! Uniprocessor real-time scheduling simulator.
//!
//! Simulates Rate Monotonic and Earliest Deadline First over a discrete
//! time grid and runs the classical utilisation tests for both policies.

pub mod core;
pub mod models;
pub mod utils;

pub use models::scheduler;
pub use models::{
    analyze, DeadlineMiss, SchedulabilityReport, ScheduleRecord, Task, TaskSet, TimeStep, ID,
};
pub use utils::{constants, errors, lcm, report};
pub use utils::{SchedulingCode, SchedulingError};
