pub mod predictions;
pub mod report;
