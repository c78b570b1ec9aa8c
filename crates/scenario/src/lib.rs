pub mod catalog;
pub mod fixtures;

pub use catalog::{AGENT_NUMBER, UseCase, UseCaseConfig};
