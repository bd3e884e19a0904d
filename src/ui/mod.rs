//! Terminal and JSON output

pub mod error;
pub mod json;
pub mod output;
