//! Command-line presentation: argument parsing, prompts and printing.
//! Binary-only; the library never depends on anything in here.

pub mod args;
pub mod print;
pub mod prompt;
