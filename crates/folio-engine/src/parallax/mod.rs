pub mod engine;
pub mod transform;
