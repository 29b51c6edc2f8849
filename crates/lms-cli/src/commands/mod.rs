pub mod auth;
pub mod certificate;
pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod student;
pub mod submission;
pub mod wizard;
