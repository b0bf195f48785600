pub mod scheduler;

pub use scheduler::RefreshScheduler;
