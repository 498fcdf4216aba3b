#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Convroute: Conversion Chain Routing
//!
//! A Rust library for routing values between data formats through chains of
//! registered point-to-point converters.
//!
//! ## Quick Start
//!
//! ### Direct Conversion
//!
//! ```
//! use convroute::{ConversionRegistry, FnConverter};
//!
//! # fn main() -> Result<(), convroute::ConvertError> {
//! let mut registry = ConversionRegistry::new();
//! registry.register(FnConverter::new("markdown", "html", |v: String| {
//!     Ok(format!("<p>{v}</p>"))
//! }));
//!
//! let html = registry.convert("hello".to_string(), "markdown", "html")?;
//! assert_eq!(html, "<p>hello</p>");
//! # Ok(())
//! # }
//! ```
//!
//! ### Chained Conversion
//!
//! No direct converter is needed when a chain of registered ones connects
//! the requested formats:
//!
//! ```
//! use convroute::{ConversionRegistry, FnConverter};
//!
//! # fn main() -> Result<(), convroute::ConvertError> {
//! let mut registry = ConversionRegistry::new();
//! registry.register(FnConverter::new("json", "xml", |v: String| {
//!     Ok(format!("<data>{v}</data>"))
//! }));
//! registry.register(FnConverter::new("xml", "csv", |v: String| {
//!     Ok(v.len().to_string())
//! }));
//!
//! // Resolved as json -> xml -> csv.
//! let csv = registry.convert("{}".to_string(), "json", "csv")?;
//! assert_eq!(csv, "15");
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting Routes Without Executing Them
//!
//! ```
//! use convroute::{ConversionRegistry, FnConverter};
//!
//! # fn main() -> Result<(), convroute::ConvertError> {
//! let mut registry = ConversionRegistry::new();
//! registry.register(FnConverter::new("json", "xml", |v: String| Ok(v)));
//! registry.register(FnConverter::new("xml", "csv", |v: String| Ok(v)));
//!
//! if let Some(chain) = registry.find_chain("json", "csv")? {
//!     assert_eq!(chain.to_string(), "json -> xml -> csv");
//!     assert_eq!(chain.len(), 2);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`registry`] — Converter registration and conversion dispatch
//! - [`converter`] — The [`Converter`] trait and closure-backed adapters
//! - [`chain`] — Discovered conversion chains and their steps
//! - [`format`] — Format tags identifying conversion endpoints
//! - [`error`] — Error types and result type
//!
//! ## Resolution Order
//!
//! - **Direct match** — the first registered converter for the exact pair
//! - **Zero-hop identity** — same source and target, value passes through
//! - **Two-hop fast path** — a pair of converters meeting in the middle
//! - **Chain search** — depth-first discovery over the format graph,
//!   shortest chain preferred, earlier registration breaking ties

pub mod chain;
pub mod converter;
pub mod error;
pub mod format;
pub mod registry;
mod search;

pub use chain::{Chain, ChainStep};
pub use converter::{Converter, FnConverter};
pub use error::{ConvertError, Result};
pub use format::FormatTag;
pub use registry::{ConversionRegistry, DEFAULT_MAX_SEARCH_DEPTH, TwoHopMode};
