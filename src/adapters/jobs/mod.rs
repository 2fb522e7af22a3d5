//! Background jobs.

mod scheduler;

pub use scheduler::{JobScheduler, JobSchedulerConfig};
