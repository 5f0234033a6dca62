//! # Configuration Store
//!
//! This module defines [`ConfigStore`], the facade over one nested
//! configuration Document. A Document is a `serde_json` value tree; the
//! store's root is always a mapping (`serde_json::Map<String, Value>`).
//!
//! ## Key Operations
//!
//! - **`get` / `get_or`**: read a value addressed by a `/`-separated path.
//! - **`set`**: write a value at a path, creating intermediate mappings.
//! - **`child`**: extract a sub-mapping as an independent store.
//! - **`merged_with`**: combine this store with another, the other winning
//!   on conflicts (see the [`crate::merge`] module).
//!
//! Stores never share structure: `child` and merge results own deep copies
//! of the relevant subtrees, so mutating one store can never be observed
//! through another. A single store is not safe for unsynchronized mutation
//! from multiple threads; `set` is a plain read-modify-write.
//!
//! ## Example
//!
//! ```
//! use config_tree::ConfigStore;
//! use serde_json::json;
//!
//! let mut store = ConfigStore::new();
//! store.set("server/host", "localhost").unwrap();
//! store.set("server/port", 8080).unwrap();
//!
//! assert_eq!(store.get("server/port").unwrap(), Some(&json!(8080)));
//!
//! let server = store.child("server", false).unwrap();
//! assert_eq!(server.get("host").unwrap(), Some(&json!("localhost")));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::merge;
use crate::path::split_path;

/// A path-addressable store over one nested configuration Document.
///
/// Created empty, from an existing mapping, or as the result of a
/// [`child`](ConfigStore::child) or merge operation. Reads short-circuit to
/// "not found" when a path leads through missing or scalar nodes; writes
/// create intermediate mappings as needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigStore {
    data: Map<String, Value>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing Document mapping in a store.
    ///
    /// The store takes ownership; unless mutated via [`set`](ConfigStore::set),
    /// [`get_all`](ConfigStore::get_all) returns the same data.
    pub fn from_map(data: Map<String, Value>) -> Self {
        Self { data }
    }

    /// The complete Document held by this store.
    pub fn get_all(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Consume the store and return its Document.
    pub fn into_inner(self) -> Map<String, Value> {
        self.data
    }

    /// Look up the value addressed by `path`.
    ///
    /// The path is split into segments (see [`crate::path::split_path`]);
    /// each segment resolves a key in a mapping, or a decimal index in an
    /// array. A missing key, an out-of-range index, or a scalar in the
    /// middle of the path short-circuits to `Ok(None)` rather than
    /// failing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is the empty string. The
    /// check happens before any traversal.
    pub fn get(&self, path: &str) -> Result<Option<&Value>> {
        if path.is_empty() {
            return Err(Error::InvalidPath);
        }

        let segments = split_path(path);
        let (first, rest) = match segments.split_first() {
            Some(parts) => parts,
            None => return Err(Error::InvalidPath),
        };

        let mut current = match self.data.get(first) {
            Some(value) => value,
            None => return Ok(None),
        };
        for segment in rest {
            match lookup(current, segment) {
                Some(value) => current = value,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Look up the value addressed by `path`, falling back to `default`.
    ///
    /// A caller cannot distinguish "not found" from "found, equal to the
    /// default" through this call; use [`get`](ConfigStore::get) when the
    /// distinction matters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is the empty string.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> Result<&'a Value> {
        Ok(self.get(path)?.unwrap_or(default))
    }

    /// Extract the mapping at `path` as an independent store.
    ///
    /// The returned store holds a deep copy: mutating it never affects this
    /// store, and vice versa.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the sub-configuration.
    /// * `tolerant` - If true, a missing path yields an empty store instead
    ///   of an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is empty,
    /// [`Error::NotFound`] if the path resolves to nothing and `tolerant`
    /// is false, and [`Error::InvalidStructure`] if the path resolves to
    /// anything other than a mapping (a scalar or an array).
    pub fn child(&self, path: &str, tolerant: bool) -> Result<ConfigStore> {
        match self.get(path)? {
            Some(Value::Object(inner)) => Ok(ConfigStore::from_map(inner.clone())),
            Some(_) => Err(Error::InvalidStructure {
                path: path.to_string(),
            }),
            None if tolerant => Ok(ConfigStore::new()),
            None => Err(Error::NotFound {
                path: path.to_string(),
            }),
        }
    }

    /// Set `value` at `path`, creating intermediate nodes as needed.
    ///
    /// Descends the Document along the path; a segment that names a
    /// decimal index into an existing array descends into that element
    /// (padding with `null` past the end), and any other missing or
    /// scalar node in the way becomes a fresh empty mapping. Overwriting
    /// a scalar in the way is a deliberate structural overwrite, not an
    /// error. The final segment is assigned `value`.
    ///
    /// Any `Into<Value>` works as the value, including another
    /// `ConfigStore` (its underlying Document is stored, not the store
    /// object). Returns `&mut Self` so calls can be chained.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` is the empty string.
    pub fn set<V: Into<Value>>(&mut self, path: &str, value: V) -> Result<&mut Self> {
        if path.is_empty() {
            return Err(Error::InvalidPath);
        }

        let segments = split_path(path);
        let (first, rest) = match segments.split_first() {
            Some(parts) => parts,
            None => return Err(Error::InvalidPath),
        };

        if rest.is_empty() {
            self.data.insert(first.clone(), value.into());
            return Ok(self);
        }

        let mut current = self.data.entry(first.clone()).or_insert(Value::Null);
        for segment in rest {
            current = ensure_child(current, segment);
        }
        *current = value.into();

        Ok(self)
    }

    /// Merge this store with `other`, `other` taking precedence.
    ///
    /// Both inputs are left untouched; the result owns fresh data. See
    /// [`crate::merge`] for the precedence and list policy.
    pub fn merged_with(&self, other: &ConfigStore) -> ConfigStore {
        merge::merge_stores([self, other])
    }
}

/// Resolve one segment against a Document node.
///
/// Mappings look up the key; arrays accept a decimal index segment.
/// Scalars resolve nothing.
fn lookup<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(inner) => inner.get(segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|idx| items.get(idx)),
        _ => None,
    }
}

/// Resolve or create the child slot for `segment` within `node`.
///
/// An existing array keeps its shape when the segment is a decimal index,
/// padding with `null` up to that index. Anything else that is not a
/// mapping is overwritten by a fresh mapping before the key is created.
fn ensure_child<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    if node.is_array() {
        if let Ok(idx) = segment.parse::<usize>() {
            let items = node.as_array_mut().unwrap();
            while items.len() <= idx {
                items.push(Value::Null);
            }
            return &mut items[idx];
        }
    }

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    node.as_object_mut()
        .unwrap()
        .entry(segment.to_string())
        .or_insert(Value::Null)
}

impl From<Map<String, Value>> for ConfigStore {
    fn from(data: Map<String, Value>) -> Self {
        Self::from_map(data)
    }
}

/// Storing a `ConfigStore` stores its underlying Document.
impl From<ConfigStore> for Value {
    fn from(store: ConfigStore) -> Self {
        Value::Object(store.data)
    }
}
