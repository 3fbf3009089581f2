pub mod analysis;
pub mod schedule;
pub mod scheduler;
pub mod task;
pub mod taskset;

pub use analysis::{analyze, SchedulabilityReport};
pub use schedule::{DeadlineMiss, ScheduleRecord};
pub use task::Task;
pub use taskset::TaskSet;

pub type TimeStep = usize;

pub type ID = u32;
