//! validated input for the deposit calculator
//!
//! `parse` holds the per-field acceptance rules as pure functions,
//! `prompter` wraps them in re-prompting loops over any line source.

pub mod parse;
pub mod prompter;

pub use parse::{menu_for, parse_choice, parse_principal, parse_whole_number};
pub use prompter::Prompter;
