pub mod config;
pub mod detect;
pub mod error;
pub mod gate;
pub mod messages;
pub mod ui;
pub mod version;

pub use error::{GateError, Result};
