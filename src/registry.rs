//! Converter registration and conversion dispatch.
//!
//! This module provides [`ConversionRegistry`], the ordered collection of
//! registered converters and the resolver that answers conversion requests.
//! Resolution tries strategies in a fixed order and returns at the first one
//! that succeeds:
//!
//! 1. fail fast when nothing is registered;
//! 2. a **direct match** — the first registered converter for the exact
//!    `(from, to)` pair;
//! 3. **zero-hop identity** when `from == to` and no self-loop converter
//!    matched above;
//! 4. a reachability pre-check ruling out pairs whose formats appear in no
//!    converter at all;
//! 5. a **two-hop fast path** (see [`TwoHopMode`]);
//! 6. a **cached route** discovered by an earlier search;
//! 7. a full depth-first **chain search** over the format graph, whose result
//!    is cached and executed;
//! 8. otherwise the pair is unsupported.
//!
//! Discovered chains are cached per `(from, to)` pair rather than written
//! back over the converter list, so resolving one pair never disturbs the
//! routes available to any other pair. Registering a converter invalidates
//! the cache: a new edge can open a shorter route.
//!
//! # Examples
//!
//! ```
//! use convroute::{ConversionRegistry, FnConverter};
//!
//! let mut registry = ConversionRegistry::new();
//! registry.register(FnConverter::new("json", "xml", |v: String| {
//!     Ok(format!("<j>{v}</j>"))
//! }));
//! registry.register(FnConverter::new("xml", "csv", |v: String| {
//!     Ok(v.replace("><", ">,<"))
//! }));
//!
//! // No direct json->csv converter exists; the resolver chains the two
//! // registered ones.
//! let out = registry.convert("{}".to_string(), "json", "csv")?;
//! assert_eq!(out, "<j>{}</j>");
//! # Ok::<(), convroute::ConvertError>(())
//! ```

use indexmap::{IndexMap, IndexSet};

use crate::chain::{Chain, ChainStep};
use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::format::FormatTag;
use crate::search::{self, Edge};

/// Default bound on chain-discovery recursion depth.
///
/// The visited-set guard already keeps discovery finite, so this bound only
/// matters for format graphs deeper than 64 distinct hops.
pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 64;

/// Strategy for the two-converter fast path.
///
/// When no direct converter matches a request, the resolver tries to satisfy
/// it with a composition of two converters before running the general chain
/// search. Two strategies exist; [`Adjacent`](TwoHopMode::Adjacent) is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwoHopMode {
    /// Compose the first pair `A: from -> mid`, `B: mid -> to` found in
    /// registration order. The composition's formats line up end to end, so
    /// the result is always in the requested target format. Falls through to
    /// the general search when no such pair exists. (default)
    #[default]
    Adjacent,

    /// Bug-compatible with older dispatchers: apply the first registered
    /// converter consuming the source format **twice**, without checking that
    /// formats line up. The reachability pre-check guarantees such a
    /// converter exists, so in this mode the fast path always answers and the
    /// general chain search is never reached.
    FirstMatch,
}

/// Ordered registry of converters with chain-resolving dispatch.
///
/// The registry owns its converters, preserves registration order (which
/// drives every tie-break during resolution), and never shrinks. The payload
/// type `V` is chosen by the host; chains pipe a value of `V` through every
/// hop.
///
/// # Examples
///
/// ```
/// use convroute::{ConversionRegistry, FnConverter};
///
/// let mut registry = ConversionRegistry::new();
/// registry.register(FnConverter::new("md", "html", |v: String| {
///     Ok(format!("<p>{v}</p>"))
/// }));
///
/// let html = registry.convert("hi".to_string(), "md", "html")?;
/// assert_eq!(html, "<p>hi</p>");
/// # Ok::<(), convroute::ConvertError>(())
/// ```
pub struct ConversionRegistry<V> {
    converters: Vec<Box<dyn Converter<V>>>,
    route_cache: IndexMap<(FormatTag, FormatTag), Vec<usize>>,
    two_hop_mode: TwoHopMode,
    max_search_depth: usize,
}

impl<V> ConversionRegistry<V> {
    /// Create an empty registry with the default [`TwoHopMode::Adjacent`]
    /// fast path and the default search depth bound.
    #[must_use]
    pub fn new() -> Self {
        ConversionRegistry {
            converters: Vec::new(),
            route_cache: IndexMap::new(),
            two_hop_mode: TwoHopMode::default(),
            max_search_depth: DEFAULT_MAX_SEARCH_DEPTH,
        }
    }

    /// Set the two-hop fast-path strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use convroute::{ConversionRegistry, TwoHopMode};
    ///
    /// let registry: ConversionRegistry<String> =
    ///     ConversionRegistry::new().with_two_hop_mode(TwoHopMode::FirstMatch);
    /// assert_eq!(registry.two_hop_mode(), TwoHopMode::FirstMatch);
    /// ```
    #[must_use]
    pub fn with_two_hop_mode(mut self, mode: TwoHopMode) -> Self {
        self.two_hop_mode = mode;
        self
    }

    /// Set the bound on chain-discovery recursion depth.
    ///
    /// The bound caps how many hops a discovered chain can have. When a
    /// search is cut off by the bound and finds no route at all, resolution
    /// fails with [`ConvertError::DepthLimitExceeded`] instead of reporting
    /// the pair as unsupported.
    #[must_use]
    pub fn with_max_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = depth;
        self
    }

    /// Append a converter to the registry.
    ///
    /// No validation, no deduplication, no compatibility check: whatever is
    /// registered becomes an edge in the format graph. When several
    /// converters share the same format pair, the first registered one serves
    /// the direct fast path; the rest stay reachable through search order.
    pub fn register(&mut self, converter: impl Converter<V> + 'static) {
        // A new edge can open shorter routes; cached ones go stale.
        self.route_cache.clear();
        self.converters.push(Box::new(converter));
    }

    /// Number of registered converters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Whether no converter has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// The active two-hop fast-path strategy.
    #[must_use]
    pub fn two_hop_mode(&self) -> TwoHopMode {
        self.two_hop_mode
    }

    /// The active bound on chain-discovery recursion depth.
    #[must_use]
    pub fn max_search_depth(&self) -> usize {
        self.max_search_depth
    }

    /// All distinct format tags appearing in registered converters, in
    /// first-seen registration order (a converter's input before its output).
    #[must_use]
    pub fn formats(&self) -> Vec<FormatTag> {
        let mut seen: IndexSet<&FormatTag> = IndexSet::new();
        for converter in &self.converters {
            seen.insert(converter.input_format());
            seen.insert(converter.output_format());
        }
        seen.into_iter().cloned().collect()
    }

    /// The `(from, to)` pairs currently held in the route cache, in the
    /// order their routes were discovered.
    #[must_use]
    pub fn cached_routes(&self) -> Vec<(FormatTag, FormatTag)> {
        self.route_cache.keys().cloned().collect()
    }

    /// Convert a value from one format to another.
    ///
    /// Tries, in order: direct match, zero-hop identity, reachability
    /// pre-check, the two-hop fast path, a cached route, and the general
    /// chain search. The first strategy that resolves executes its converters
    /// left to right and returns the final value.
    ///
    /// # Examples
    ///
    /// ```
    /// use convroute::{ConversionRegistry, FnConverter};
    ///
    /// let mut registry = ConversionRegistry::new();
    /// registry.register(FnConverter::new("a", "b", |v: String| Ok(v + "->b")));
    /// registry.register(FnConverter::new("b", "c", |v: String| Ok(v + "->c")));
    ///
    /// assert_eq!(registry.convert("x".to_string(), "a", "c")?, "x->b->c");
    /// # Ok::<(), convroute::ConvertError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`ConvertError::NoConvertersRegistered`] when the registry is empty.
    /// - [`ConvertError::UnsupportedConversion`] when the pair's formats are
    ///   unknown to the registry or no chain connects them.
    /// - [`ConvertError::DepthLimitExceeded`] when the chain search was cut
    ///   off by the depth bound without finding a route.
    /// - Any error a converter returns while transforming, propagated
    ///   unchanged; the chain aborts at the failing hop.
    pub fn convert(
        &mut self,
        value: V,
        from: impl Into<FormatTag>,
        to: impl Into<FormatTag>,
    ) -> Result<V> {
        let from = from.into();
        let to = to.into();

        if self.converters.is_empty() {
            return Err(ConvertError::NoConvertersRegistered);
        }

        // Direct match: first registered converter for the exact pair.
        if let Some(direct) = self.find_direct(&from, &to) {
            return self.converters[direct].convert(value);
        }

        // Zero-hop identity, checked after the direct scan so a registered
        // self-loop converter still wins.
        if from == to {
            return Ok(value);
        }

        // Reachability pre-check: the pair must at least appear somewhere in
        // the registry, one converter consuming `from` and one producing
        // `to`. Rules out hopeless requests without a graph walk.
        if self.converters.len() < 2
            || !self.converters.iter().any(|c| c.input_format() == &from)
            || !self.converters.iter().any(|c| c.output_format() == &to)
        {
            return Err(ConvertError::UnsupportedConversion { from, to });
        }

        match self.two_hop_mode {
            TwoHopMode::Adjacent => {
                if let Some((first, second)) = self.find_adjacent_two_hop(&from, &to) {
                    let mid = self.converters[first].convert(value)?;
                    return self.converters[second].convert(mid);
                }
            }
            TwoHopMode::FirstMatch => {
                // The second lookup repeats the first one's predicate from
                // the start of the list, so the first source-consuming
                // converter runs twice. The pre-check guarantees it exists.
                let first = self
                    .converters
                    .iter()
                    .position(|c| c.input_format() == &from);
                if let Some(first) = first {
                    let mid = self.converters[first].convert(value)?;
                    return self.converters[first].convert(mid);
                }
            }
        }

        // A route discovered for this pair earlier.
        let key = (from.clone(), to.clone());
        if let Some(steps) = self.route_cache.get(&key).cloned() {
            return self.run_steps(value, &steps);
        }

        // Full search over the format graph.
        let route = {
            let edges = self.edge_view();
            search::find_route(&edges, &from, &to, self.max_search_depth)?
        };
        if route.is_empty() {
            return Err(ConvertError::UnsupportedConversion { from, to });
        }
        self.route_cache.insert(key, route.clone());
        self.run_steps(value, &route)
    }

    /// Discover a conversion chain from `from` to `to` without executing it.
    ///
    /// Pure discovery: no fast paths, no cache interaction. Returns
    /// `Ok(None)` when the search exhausts the graph without finding a route.
    /// The chain records which registered converter serves each hop, so it is
    /// only valid for [`execute`](Self::execute) on this registry.
    ///
    /// # Errors
    ///
    /// [`ConvertError::DepthLimitExceeded`] when the search was cut off by
    /// the depth bound without finding a route.
    pub fn find_chain(
        &self,
        from: impl Into<FormatTag>,
        to: impl Into<FormatTag>,
    ) -> Result<Option<Chain>> {
        let from = from.into();
        let to = to.into();
        let route = {
            let edges = self.edge_view();
            search::find_route(&edges, &from, &to, self.max_search_depth)?
        };
        if route.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.chain_from(&route)))
        }
    }

    /// Execute a previously discovered chain against a value.
    ///
    /// Converters run in first-to-last order; each hop's output feeds the
    /// next hop's input. An empty chain returns the value unchanged.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::ChainMismatch`] when a step does not correspond to a
    ///   converter in this registry (the chain came from a different
    ///   registry).
    /// - Any error a converter returns, propagated unchanged; execution
    ///   aborts at the failing hop.
    pub fn execute(&self, value: V, chain: &Chain) -> Result<V> {
        let mut steps = Vec::with_capacity(chain.len());
        for (position, step) in chain.steps().iter().enumerate() {
            let matches = self.converters.get(step.index).is_some_and(|c| {
                c.input_format() == &step.input && c.output_format() == &step.output
            });
            if !matches {
                return Err(ConvertError::ChainMismatch { step: position });
            }
            steps.push(step.index);
        }
        self.run_steps(value, &steps)
    }

    /// Apply the converters at `steps` to `value`, first to last.
    ///
    /// Recurses from the tail: everything before the last step is executed
    /// first, then the last step consumes that result.
    fn run_steps(&self, value: V, steps: &[usize]) -> Result<V> {
        match steps.split_last() {
            None => Ok(value),
            Some((last, [])) => self.converters[*last].convert(value),
            Some((last, rest)) => {
                let fed = self.run_steps(value, rest)?;
                self.converters[*last].convert(fed)
            }
        }
    }

    fn find_direct(&self, from: &FormatTag, to: &FormatTag) -> Option<usize> {
        self.converters
            .iter()
            .position(|c| c.input_format() == from && c.output_format() == to)
    }

    /// First pair `(A, B)` in registration order with `A: from -> mid` and
    /// `B: mid -> to`. `A` is scanned in registration order; for each `A`,
    /// `B` is scanned from the start of the list.
    fn find_adjacent_two_hop(&self, from: &FormatTag, to: &FormatTag) -> Option<(usize, usize)> {
        for (first, a) in self.converters.iter().enumerate() {
            if a.input_format() != from {
                continue;
            }
            let second = self
                .converters
                .iter()
                .position(|b| b.input_format() == a.output_format() && b.output_format() == to);
            if let Some(second) = second {
                return Some((first, second));
            }
        }
        None
    }

    fn chain_from(&self, indices: &[usize]) -> Chain {
        let steps = indices
            .iter()
            .map(|&i| {
                let converter = &self.converters[i];
                ChainStep::new(
                    i,
                    converter.input_format().clone(),
                    converter.output_format().clone(),
                )
            })
            .collect();
        Chain::new(steps)
    }

    fn edge_view(&self) -> Vec<Edge<'_>> {
        self.converters
            .iter()
            .map(|c| Edge {
                input: c.input_format(),
                output: c.output_format(),
            })
            .collect()
    }
}

impl<V> Default for ConversionRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for ConversionRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionRegistry")
            .field("converters", &self.converters)
            .field("route_cache", &self.route_cache)
            .field("two_hop_mode", &self.two_hop_mode)
            .field("max_search_depth", &self.max_search_depth)
            .finish()
    }
}
