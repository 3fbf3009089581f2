pub mod constants;
pub mod errors;
pub mod lcm;
pub mod report;

pub use constants::SchedulingCode;
pub use errors::SchedulingError;
pub use lcm::multiple_lcm;
