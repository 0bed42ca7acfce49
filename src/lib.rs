#![deny(unsafe_code)]

//! # declarai-rs
//!
//! Turns a function's static signature (parameter names, rendered type
//! annotations, docstring-derived documentation) into the deterministic
//! prompt fragments an LLM runtime needs: an example-input block, an input
//! placeholder template, and an output instruction block the model's reply
//! is later parsed against.
//!
//! ```rust
//! use declarai_rs::prelude::*;
//!
//! let func = ParsedFunction::new("add")
//!     .with_param("a", "int")
//!     .with_param("b", "int")
//!     .with_param_doc("a", "first operand")
//!     .with_return_type("int");
//!
//! assert_eq!(input_placeholder(&func), "Inputs:\na: {a}\nb: {b}\n");
//! assert!(has_output_spec(&func));
//! ```

pub mod prelude;

pub use translate::{
    DescriptorError, DiagnosticSink, FunctionTranslator, NullSink, ParsedFunction, TracingSink,
    FORMAT_INSTRUCTIONS, RESULT_KEY,
};

/// Render the example-input block for `func`: one annotated line per
/// parameter, in declaration order.
pub fn input_example(func: &ParsedFunction) -> String {
    FunctionTranslator::new(func).input_example()
}

/// Render the `Inputs:` placeholder block for `func`, with one named
/// substitution slot per parameter.
pub fn input_placeholder(func: &ParsedFunction) -> String {
    FunctionTranslator::new(func).input_placeholder()
}

/// Whether `func` declares enough return metadata to request structured
/// output (a return name or type; a return doc alone does not count).
pub fn has_output_spec(func: &ParsedFunction) -> bool {
    FunctionTranslator::new(func).has_output_spec()
}

/// Render the output instruction block for `func`. Empty (after one warning
/// through `tracing`) when the signature carries no return metadata at all.
pub fn output_instructions(func: &ParsedFunction) -> String {
    FunctionTranslator::new(func).output_instructions()
}
