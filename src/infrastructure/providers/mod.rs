//! Reference Provider Implementations

mod json_file;
mod memory;

pub use json_file::{file_providers, JsonFileProvider};
pub use memory::StaticProvider;
