// Business domains
pub mod communities;
pub mod threads;
pub mod users;
