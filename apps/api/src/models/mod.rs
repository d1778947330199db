pub mod course;
pub mod resume;
pub mod user;
