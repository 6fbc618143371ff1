pub mod spring;
pub mod time;
