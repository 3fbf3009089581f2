pub mod scheduler;
pub mod rm_scheduler;
pub mod edf_scheduler;

pub use scheduler::{for_policy, Scheduler};
pub use rm_scheduler::RateMonotonic;
pub use edf_scheduler::EarliestDeadlineFirst;
