pub mod arrival;
pub mod class;
pub mod status;
pub mod student;
pub mod summary;
