//! Interactive shell
//!
//! The numbered-menu front end. Generic over input and output so the whole
//! session can be scripted in tests.

pub mod menu;
pub mod prompt;

pub use menu::{describe_load, MenuChoice, Shell};
pub use prompt::{parse_amount, Prompter};
