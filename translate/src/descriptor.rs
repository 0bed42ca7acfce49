//! Core data model for the translate crate.
//!
//! A [`ParsedFunction`] is the already-parsed view of a function's interface:
//! its name, its parameters in declaration order, and whatever documentation
//! the docstring carried for parameters and the return value. It is produced
//! by an external signature parser and consumed read-only here.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// A function's declared interface plus its docstring-derived documentation.
///
/// Parameter order is significant: the emitted prompt blocks repeat it
/// verbatim, and the model is expected to echo the same keys back. An
/// ordered list of `(name, rendered)` pairs is therefore used instead of a
/// map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedFunction {
    /// Function identifier.
    pub name: String,
    /// Ordered `(parameter name, rendered type/value)` pairs.
    pub params: Vec<(String, String)>,
    /// Per-parameter documentation, keyed by parameter name. Any subset of
    /// `params` may be documented; keys naming no declared parameter are
    /// ignored.
    pub param_docs: HashMap<String, String>,
    /// Rendered return type annotation, if declared.
    pub return_type: Option<String>,
    /// Semantic name of the return value, if documented.
    pub return_name: Option<String>,
    /// Description of the return value, if documented.
    pub return_doc: Option<String>,
}

impl ParsedFunction {
    /// Start a descriptor for the named function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a parameter with its rendered type/value representation.
    pub fn with_param(mut self, name: impl Into<String>, rendered: impl Into<String>) -> Self {
        self.params.push((name.into(), rendered.into()));
        self
    }

    /// Attach documentation to a parameter.
    pub fn with_param_doc(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.param_docs.insert(name.into(), doc.into());
        self
    }

    /// Set the rendered return type annotation.
    pub fn with_return_type(mut self, rendered: impl Into<String>) -> Self {
        self.return_type = Some(rendered.into());
        self
    }

    /// Set the semantic name of the return value.
    pub fn with_return_name(mut self, name: impl Into<String>) -> Self {
        self.return_name = Some(name.into());
        self
    }

    /// Set the return value description.
    pub fn with_return_doc(mut self, doc: impl Into<String>) -> Self {
        self.return_doc = Some(doc.into());
        self
    }

    /// Check the structural invariants an upstream parser must uphold.
    ///
    /// Translation itself is total over any descriptor; this is a gate for
    /// parsers that want to fail fast instead of shipping a malformed
    /// signature downstream.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        let mut seen = HashSet::with_capacity(self.params.len());
        for (param, _) in &self.params {
            if !seen.insert(param.as_str()) {
                return Err(DescriptorError::DuplicateParam {
                    name: param.clone(),
                });
            }
        }
        Ok(())
    }
}
