//! Declared parameter schemas for remote endpoints.
//!
//! # Design
//! A schema is an ordered list of `(name, optional)` pairs fixed per endpoint
//! at facade definition time, never mutated at call time. Validation only
//! checks presence of required parameters; types and ranges are the remote
//! service's concern.

use std::collections::HashMap;

use crate::error::ApiError;

/// One declared parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub optional: bool,
}

impl Parameter {
    pub fn required(name: &'static str) -> Self {
        Self { name, optional: false }
    }

    pub fn optional(name: &'static str) -> Self {
        Self { name, optional: true }
    }
}

/// Ordered parameter declarations for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSchema {
    entries: Vec<Parameter>,
}

impl ParameterSchema {
    pub fn new(entries: impl Into<Vec<Parameter>>) -> Self {
        Self { entries: entries.into() }
    }

    pub fn entries(&self) -> &[Parameter] {
        &self.entries
    }

    /// Fail with `MissingParameter` for the first required entry that has no
    /// value in the supplied map. An absent map counts as all-absent.
    pub fn validate(&self, parameters: Option<&HashMap<String, String>>) -> Result<(), ApiError> {
        for entry in &self.entries {
            if entry.optional {
                continue;
            }
            let present = parameters.is_some_and(|p| p.contains_key(entry.name));
            if !present {
                return Err(ApiError::MissingParameter(entry.name.to_string()));
            }
        }
        Ok(())
    }
}
