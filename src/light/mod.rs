//! Layer 2: Light
//!
//! # Purpose
//!
//! This layer defines the plugin seam through which the host renderer
//! obtains light-model instances. A factory identifies its model, exposes
//! static descriptive metadata for the model and its inputs, and creates an
//! owned light instance from a name and a parameter bag.
//!
//! # Design notes
//!
//! * **Boundary only**: concrete light models, the scene graph, and the
//!   renderer live elsewhere. This module carries just enough surface for
//!   factories to be registered and driven generically.
//! * **Parameter bag**: [`ParamSet`] is an ordered name/value list, a
//!   minimal stand-in for the host's dictionary system. Lookup is linear;
//!   parameter sets are tiny.
//! * **Threading**: factories are used behind `&self` from multiple
//!   threads, so implementations must not rely on interior mutability.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, string::String, vec::Vec};

// ============================================================================
// Parameter Bag
// ============================================================================

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Numeric parameter.
    Scalar(f64),

    /// Textual parameter (entity references, enum-like choices).
    Text(String),

    /// Boolean parameter.
    Flag(bool),
}

/// Ordered bag of named parameters passed to a factory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) -> &mut Self {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
        self
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Look up a numeric parameter by name.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ParamValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Number of parameters in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Model Metadata
// ============================================================================

/// Descriptive metadata for a light model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMetadata {
    /// Stable model identifier (e.g. `"point_light"`).
    pub name: &'static str,

    /// Human-readable label for UI display.
    pub label: &'static str,
}

/// Descriptive metadata for a single input of a light model.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMetadata {
    /// Stable input identifier.
    pub name: &'static str,

    /// Human-readable label for UI display.
    pub label: &'static str,

    /// Default value, if the input is optional.
    pub default: Option<ParamValue>,
}

/// Return the input metadata common to all light models.
///
/// Factories splice these entries into their own input lists.
pub fn common_input_metadata() -> Vec<InputMetadata> {
    vec![
        InputMetadata {
            name: "intensity",
            label: "Intensity",
            default: None,
        },
        InputMetadata {
            name: "intensity_multiplier",
            label: "Intensity Multiplier",
            default: Some(ParamValue::Scalar(1.0)),
        },
    ]
}

// ============================================================================
// Light and Factory Traits
// ============================================================================

/// A light instance owned by the host scene.
pub trait Light {
    /// Instance name, unique within the scene.
    fn name(&self) -> &str;

    /// Identifier of the model this instance was created from.
    fn model(&self) -> &'static str;
}

/// Factory interface for a pluggable light model.
pub trait LightFactory {
    /// Return a string identifying this light model.
    fn model(&self) -> &'static str;

    /// Return metadata for this light model.
    fn model_metadata(&self) -> ModelMetadata;

    /// Return metadata for the inputs of this light model.
    fn input_metadata(&self) -> Vec<InputMetadata>;

    /// Create a new light instance.
    fn create(&self, name: &str, params: &ParamSet) -> Box<dyn Light>;
}
