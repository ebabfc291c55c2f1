//! Static extraction of step configuration
//!
//! The locator parses a step file into a syntax tree and projects the
//! top-level `config` declaration into a structured record without
//! executing any code from the file.

pub mod locator;
pub mod schema;

pub use locator::{locate, LocateError};
pub use schema::StepConfig;
