pub mod briefing;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;
pub mod rules;
pub mod scanner;
pub mod splitter;

pub use error::{ProseGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_TARGET_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
