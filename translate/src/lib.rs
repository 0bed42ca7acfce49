#![deny(unsafe_code)]

//! Deterministic translation of parsed function signatures into the prompt
//! fragments an LLM runtime submits alongside a task description.
//!
//! The input is a [`ParsedFunction`] produced by an external signature
//! parser; the output is plain text whose every byte is part of the contract
//! with the downstream reply parser.

pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod translator;

pub use descriptor::ParsedFunction;
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::DescriptorError;
pub use translator::{FunctionTranslator, FORMAT_INSTRUCTIONS, RESULT_KEY};
