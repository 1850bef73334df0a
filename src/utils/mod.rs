pub mod repo;
pub mod age;

pub use repo::{active_branches, branch_exists, get_branch_name, get_repo};
pub use age::relative_time;
