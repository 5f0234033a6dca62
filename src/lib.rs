//! # Config Tree Library
//!
//! This library provides path-addressed access to nested configuration
//! data, and deterministic recursive merging of several such structures
//! with precedence rules. It treats deeply nested configuration (as
//! produced by file parsers, environment loaders, or hand-built defaults)
//! as a flat, `/`-addressable store, and combines multiple sources
//! (defaults, overrides, environment-specific values) into one without
//! ad-hoc deep-merge code at the call site.
//!
//! ## Quick Example
//!
//! ```
//! use config_tree::{merge_stores, ConfigStore};
//! use serde_json::json;
//!
//! // Hand-built defaults; real data usually comes from a parser.
//! let mut defaults = ConfigStore::new();
//! defaults.set("server/host", "localhost").unwrap();
//! defaults.set("server/port", 8080).unwrap();
//!
//! let mut overrides = ConfigStore::new();
//! overrides.set("server/port", 443).unwrap();
//!
//! let merged = merge_stores([&defaults, &overrides]);
//! assert_eq!(merged.get("server/host").unwrap(), Some(&json!("localhost")));
//! assert_eq!(merged.get("server/port").unwrap(), Some(&json!(443)));
//!
//! // Child scopes are independent deep copies.
//! let server = merged.child("server", false).unwrap();
//! assert_eq!(server.get("port").unwrap(), Some(&json!(443)));
//! ```
//!
//! ## Core Concepts
//!
//! - **Document**: a tree of mappings, arrays, and scalars
//!   (`serde_json::Value`) representing configuration data. Producing a
//!   Document from files or the environment is out of scope; any parser
//!   that yields a `serde_json::Map` can feed a store.
//! - **Path (`path`)**: `/`-separated segments addressing a location in a
//!   Document, with `\/` escaping a literal slash inside a segment.
//! - **Store (`store`)**: [`ConfigStore`], the facade wrapping one root
//!   Document with get/set/child/merge operations.
//! - **Merge (`merge`)**: the recursive merge engine; later documents win,
//!   lists merge index-wise rather than by replacement or concatenation.
//!
//! Everything is synchronous and I/O-free. Stores obtained via `child` or
//! merging own deep copies, so no coordination is needed between them; a
//! single store requires external synchronization for concurrent mutation.

pub mod error;
pub mod merge;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use merge::{merge_recursively, merge_stores, DefaultMerger, DocumentMerger};
pub use store::ConfigStore;

#[cfg(test)]
mod path_proptest;
