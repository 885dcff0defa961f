pub mod generation;
pub mod topic;
