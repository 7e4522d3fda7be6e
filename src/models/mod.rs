pub mod lenient;
pub mod routine;
pub mod schedule;
pub mod settings;
