// src/program/mod.rs

//! Textual gate programs: parsing and token-by-token interpretation.

mod interpreter;
mod parser;

pub use interpreter::{Interpreter, apply_sequence};
pub use parser::{parse_program, parse_token, tokenize};
