pub mod course;
pub mod status;

pub use course::{Competitor, Coordinator, Course, Discipline, NO_COORDINATOR};
pub use status::ReviewStatus;
