//! Shared helpers used across domain modules

mod parse;
mod string;

pub use parse::{parse_int, parse_int_or_zero};
pub use string::{none_if_blank, trimmed};
