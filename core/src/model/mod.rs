mod assignment;
mod task;

pub use assignment::{validate_assignments, Assignment, Priority};
pub use task::{tasks_from_body, Task};
