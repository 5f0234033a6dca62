//! Recursive merge engine for configuration Documents
//!
//! This module combines an ordered sequence of Document mappings into one,
//! later documents taking precedence over earlier ones. Merging is a total
//! function: it cannot fail, and its result never aliases its inputs.
//!
//! ## Precedence Rules
//!
//! For every key in the higher-precedence document:
//!
//! - Both values mappings: recursively merge keys.
//! - Both values arrays: merge index-wise. The overlay element at index i
//!   replaces (or, for containers, recursively merges into) the base
//!   element at index i; trailing base elements stay put; overlay elements
//!   past the end of the base are appended.
//! - Base array, overlay a mapping whose keys are all decimal indices:
//!   merged index-wise into the array, so `{"1": 9}` over `[1, 2]` yields
//!   `[1, 9]`. Indices past the end pad the gap with `null`.
//! - Anything else (new key, scalar collision, type mismatch): the overlay
//!   value replaces the base value wholesale.
//!
//! Keys present only in the base document are retained unchanged. The
//! index-wise list policy is deliberate: override lists patch base lists
//! element by element rather than replacing or appending.
//!
//! ## Example
//!
//! ```
//! use config_tree::merge::merge_recursively;
//! use serde_json::json;
//!
//! let base = json!({"a": {"x": 1, "y": 2}});
//! let overlay = json!({"a": {"x": 9}});
//! let merged = merge_recursively(&[
//!     base.as_object().unwrap(),
//!     overlay.as_object().unwrap(),
//! ]);
//! assert_eq!(merged, *json!({"a": {"x": 9, "y": 2}}).as_object().unwrap());
//! ```

use std::collections::BTreeMap;

use log::warn;
use serde_json::{Map, Value};

use crate::store::ConfigStore;

/// A policy for recursively merging Document mappings.
///
/// The shipped implementation is [`DefaultMerger`]; the trait is the seam
/// for alternative policies (append instead of index-wise list patching,
/// say) without touching [`ConfigStore`].
pub trait DocumentMerger {
    /// Merge the given documents left to right; later documents take
    /// precedence over earlier ones. Zero documents yield an empty mapping.
    fn merge_recursively(&self, docs: &[&Map<String, Value>]) -> Map<String, Value>;
}

/// The default merge policy: key-union on mappings, index-wise on arrays,
/// overlay-wins on everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMerger;

impl DocumentMerger for DefaultMerger {
    fn merge_recursively(&self, docs: &[&Map<String, Value>]) -> Map<String, Value> {
        let mut merged = Map::new();
        for next in docs {
            if merged.is_empty() {
                merged = (*next).clone();
            } else if next.is_empty() {
                // nothing to fold in
            } else {
                merged = merge_maps(&merged, next);
            }
        }
        merged
    }
}

/// Merge documents with the [`DefaultMerger`] policy.
///
/// Later documents take precedence. The result is a fresh mapping; the
/// inputs are not modified, and mutating the result does not affect them.
pub fn merge_recursively(docs: &[&Map<String, Value>]) -> Map<String, Value> {
    DefaultMerger.merge_recursively(docs)
}

/// Merge the Documents of several stores into a new [`ConfigStore`].
///
/// Later stores take precedence. The sources are left untouched.
pub fn merge_stores<'a, I>(stores: I) -> ConfigStore
where
    I: IntoIterator<Item = &'a ConfigStore>,
{
    let docs: Vec<&Map<String, Value>> = stores.into_iter().map(|s| s.get_all()).collect();
    ConfigStore::from_map(merge_recursively(&docs))
}

fn merge_maps(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, incoming) in overlay {
        match merged.get_mut(key) {
            Some(existing) => *existing = merge_values(existing, incoming),
            None => {
                merged.insert(key.clone(), incoming.clone());
            }
        }
    }
    merged
}

fn merge_values(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_maps(base_map, overlay_map))
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            let mut indexed = BTreeMap::new();
            for (idx, item) in overlay_items.iter().enumerate() {
                indexed.insert(idx, item);
            }
            Value::Array(merge_indexed(base_items, &indexed))
        }
        (Value::Array(base_items), Value::Object(overlay_map)) => {
            match as_index_map(overlay_map) {
                Some(indexed) => Value::Array(merge_indexed(base_items, &indexed)),
                None => {
                    warn!("type mismatch during merge: mapping replaces array wholesale");
                    overlay.clone()
                }
            }
        }
        _ => {
            if base.is_object() || base.is_array() {
                warn!("type mismatch during merge: overlay replaces container wholesale");
            }
            overlay.clone()
        }
    }
}

/// Patch `base` element-wise with the overlay entries keyed by index.
///
/// Indices within bounds merge recursively; indices past the end extend the
/// array, padding any gap with `null`.
fn merge_indexed(base: &[Value], overlay: &BTreeMap<usize, &Value>) -> Vec<Value> {
    let mut merged = base.to_vec();
    for (&idx, &incoming) in overlay {
        if idx < merged.len() {
            merged[idx] = merge_values(&merged[idx], incoming);
        } else {
            while merged.len() < idx {
                merged.push(Value::Null);
            }
            merged.push(incoming.clone());
        }
    }
    merged
}

/// Structural list-likeness: a mapping whose keys all parse as decimal
/// indices is treated as an array patch.
fn as_index_map(map: &Map<String, Value>) -> Option<BTreeMap<usize, &Value>> {
    let mut indexed = BTreeMap::new();
    for (key, value) in map {
        indexed.insert(key.parse::<usize>().ok()?, value);
    }
    Some(indexed)
}
