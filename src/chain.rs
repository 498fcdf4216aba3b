//! Resolved conversion chains.
//!
//! A [`Chain`] is the route the resolver discovered for a conversion request:
//! an ordered sequence of [`ChainStep`]s in which each step's output format
//! equals the next step's input format, the first step consumes the requested
//! source format, and the last step produces the requested target format.
//!
//! Chains are produced by
//! [`ConversionRegistry::find_chain`](crate::ConversionRegistry::find_chain)
//! and can be executed later with
//! [`ConversionRegistry::execute`](crate::ConversionRegistry::execute). They
//! record which registered converter serves each hop, so a chain is only
//! meaningful for the registry that created it.

use crate::format::FormatTag;

/// One resolved hop in a conversion chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStep {
    /// Position of the serving converter in registration order.
    pub(crate) index: usize,
    /// Format this hop consumes.
    pub input: FormatTag,
    /// Format this hop produces.
    pub output: FormatTag,
}

impl ChainStep {
    pub(crate) fn new(index: usize, input: FormatTag, output: FormatTag) -> Self {
        ChainStep {
            index,
            input,
            output,
        }
    }
}

/// Ordered sequence of converters linking a source format to a target format.
///
/// # Examples
///
/// ```
/// use convroute::{ConversionRegistry, FnConverter};
///
/// let mut registry = ConversionRegistry::new();
/// registry.register(FnConverter::new("json", "xml", |v: String| Ok(v)));
/// registry.register(FnConverter::new("xml", "csv", |v: String| Ok(v)));
///
/// let chain = registry.find_chain("json", "csv")?.expect("route exists");
/// assert_eq!(chain.len(), 2);
/// assert!(chain.is_linked());
/// assert_eq!(chain.to_string(), "json -> xml -> csv");
/// # Ok::<(), convroute::ConvertError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    steps: Vec<ChainStep>,
}

impl Chain {
    pub(crate) fn new(steps: Vec<ChainStep>) -> Self {
        Chain { steps }
    }

    /// Number of hops in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the chain has no hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The hops, in execution order.
    #[must_use]
    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }

    /// The chain's overall input format: the first hop's input.
    #[must_use]
    pub fn input_format(&self) -> Option<&FormatTag> {
        self.steps.first().map(|step| &step.input)
    }

    /// The chain's overall output format: the last hop's output.
    #[must_use]
    pub fn output_format(&self) -> Option<&FormatTag> {
        self.steps.last().map(|step| &step.output)
    }

    /// Whether every adjacent pair of hops links up: each hop's output format
    /// equals the next hop's input format. Chains of length 0 or 1 are
    /// trivially linked.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.steps
            .windows(2)
            .all(|pair| pair[0].output == pair[1].input)
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.steps.first() {
            None => write!(f, "(empty)"),
            Some(first) => {
                write!(f, "{}", first.input)?;
                for step in &self.steps {
                    write!(f, " -> {}", step.output)?;
                }
                Ok(())
            }
        }
    }
}
