//! Error types for the translate crate.

/// Structural problems in a [`ParsedFunction`](crate::ParsedFunction).
///
/// Only [`validate`](crate::ParsedFunction::validate) produces these;
/// translation never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The function name is empty.
    #[error("function name must not be empty")]
    EmptyName,

    /// A parameter name is declared more than once.
    #[error("parameter '{name}' is declared more than once")]
    DuplicateParam { name: String },
}
