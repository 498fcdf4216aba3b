//! The converter capability trait and a closure-backed adapter.
//!
//! This module defines [`Converter`], the contract every registered converter
//! must satisfy, and [`FnConverter`], a lightweight adapter that turns a
//! closure plus a format pair into a converter.
//!
//! # Design Rationale
//!
//! A converter is a directed edge in the format graph: it declares exactly one
//! input format, exactly one output format, and a fallible transform between
//! them. The trait is:
//! - Object-safe, so the registry can hold heterogeneous converters behind
//!   `Box<dyn Converter<V>>`
//! - Generic over the payload type `V`, chosen once by the host; chains pipe
//!   a value of `V` through every hop
//! - Read-only with respect to its own state: the dispatcher never mutates a
//!   converter after registration
//!
//! # Example
//!
//! ```
//! use convroute::{Converter, FnConverter, FormatTag};
//!
//! let upper = FnConverter::new("txt", "shout", |s: String| Ok(s.to_uppercase()));
//! assert_eq!(upper.input_format(), &FormatTag::new("txt"));
//! assert_eq!(upper.output_format(), &FormatTag::new("shout"));
//! assert_eq!(upper.convert("hi".to_string()).unwrap(), "HI");
//! ```

use crate::error::Result;
use crate::format::FormatTag;

/// Capability transforming values of one format into another.
///
/// Implementations declare the single ordered format pair they handle and a
/// transform that may fail. Failures are reported as
/// [`ConvertError::ConverterFailed`](crate::ConvertError::ConverterFailed)
/// and propagated to the caller unchanged; the dispatcher adds no wrapping
/// and attempts no fallback route.
///
/// # Implementation Notes
///
/// - `input_format` and `output_format` must return the same tags for the
///   lifetime of the converter; resolution caches routes under that
///   assumption.
/// - `convert` consumes the value and produces the transformed value. Inside
///   a chain, the output of one converter is fed directly to the next.
pub trait Converter<V>: std::fmt::Debug {
    /// The format this converter consumes.
    fn input_format(&self) -> &FormatTag;

    /// The format this converter produces.
    fn output_format(&self) -> &FormatTag;

    /// Transform a value from the input format to the output format.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::ConverterFailed`](crate::ConvertError::ConverterFailed)
    /// (or any other [`ConvertError`](crate::ConvertError)) when the value
    /// cannot be transformed.
    fn convert(&self, value: V) -> Result<V>;
}

/// Converter built from a closure and a format pair.
///
/// The usual way for hosts and tests to register converters without writing a
/// trait impl per format pair.
///
/// # Examples
///
/// ```
/// use convroute::{ConversionRegistry, FnConverter};
///
/// let mut registry = ConversionRegistry::new();
/// registry.register(FnConverter::new("json", "xml", |v: String| {
///     Ok(format!("<doc>{v}</doc>"))
/// }));
///
/// let out = registry.convert("{}".to_string(), "json", "xml")?;
/// assert_eq!(out, "<doc>{}</doc>");
/// # Ok::<(), convroute::ConvertError>(())
/// ```
pub struct FnConverter<F> {
    input: FormatTag,
    output: FormatTag,
    transform: F,
}

impl<F> FnConverter<F> {
    /// Create a converter from a format pair and a transform closure.
    pub fn new(input: impl Into<FormatTag>, output: impl Into<FormatTag>, transform: F) -> Self {
        FnConverter {
            input: input.into(),
            output: output.into(),
            transform,
        }
    }
}

impl<F> std::fmt::Debug for FnConverter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConverter")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl<V, F> Converter<V> for FnConverter<F>
where
    F: Fn(V) -> Result<V>,
{
    fn input_format(&self) -> &FormatTag {
        &self.input
    }

    fn output_format(&self) -> &FormatTag {
        &self.output
    }

    fn convert(&self, value: V) -> Result<V> {
        (self.transform)(value)
    }
}
