//! Convenient re-exports for common usage patterns.
//!
//! This prelude module re-exports the most commonly used items from
//! declarai-rs, allowing users to import everything they typically need with
//! a single use statement:
//!
//! ```rust
//! use declarai_rs::prelude::*;
//! ```

// Core functionality
pub use crate::{has_output_spec, input_example, input_placeholder, output_instructions};

// Essential types
pub use crate::{
    DescriptorError, DiagnosticSink, FunctionTranslator, NullSink, ParsedFunction, TracingSink,
};

// Formatting contract constants
pub use crate::{FORMAT_INSTRUCTIONS, RESULT_KEY};
