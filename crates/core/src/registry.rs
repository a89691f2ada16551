//! Registry resolving named trees through pluggable sources.
//!
//! Cross-tree references carry only a name; the registry maps that name
//! to an actual tree through an ordered list of [`TreeSource`]s and keeps
//! every loaded tree cached for the lifetime of the registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{DocnavError, Result};
use crate::model::{NavNode, NavTree};

/// Capability through which named trees are found.
///
/// `Ok(None)` means the source does not know the name; the registry then
/// falls through to the next source. Errors are reserved for sources that
/// recognize the name but cannot produce the tree.
pub trait TreeSource: Send + Sync {
    fn load(&self, name: &str) -> Result<Option<NavTree>>;
}

/// In-memory source over already-decoded trees.
///
/// `names()` follows insertion order, matching the order in which the
/// embedder registered the trees.
#[derive(Default)]
pub struct MemorySource {
    trees: IndexMap<String, NavTree>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, tree: NavTree) {
        self.trees.insert(name.into(), tree);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.keys().map(String::as_str)
    }
}

impl TreeSource for MemorySource {
    fn load(&self, name: &str) -> Result<Option<NavTree>> {
        Ok(self.trees.get(name).cloned())
    }
}

/// Holds the static forest and resolves cross-tree references.
///
/// Loaded trees are immutable and handed out as `Arc`s, so concurrent
/// readers share them without further locking; the only interior state is
/// the name-to-tree cache.
#[derive(Default)]
pub struct TreeRegistry {
    sources: Vec<Box<dyn TreeSource>>,
    cache: RwLock<HashMap<String, Arc<NavTree>>>,
}

impl std::fmt::Debug for TreeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeRegistry")
            .field("sources", &self.sources.len())
            .field("cache", &self.cache)
            .finish()
    }
}

impl TreeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Box<dyn TreeSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn add_source(&mut self, source: Box<dyn TreeSource>) {
        self.sources.push(source);
    }

    /// Load the named tree. The first source that knows the name wins;
    /// the result is cached, so repeated loads return the same `Arc`.
    /// A name no source knows fails with `TreeNotFound`, and a failed
    /// load caches nothing.
    pub fn load(&self, name: &str) -> Result<Arc<NavTree>> {
        if let Some(tree) = self.cache.read().unwrap().get(name) {
            debug!("tree {name} served from cache");
            return Ok(tree.clone());
        }

        for source in &self.sources {
            if let Some(tree) = source.load(name)? {
                debug!("tree {name} loaded ({} root node(s))", tree.roots().len());
                let tree = Arc::new(tree);
                let mut cache = self.cache.write().unwrap();
                // Two readers may race here; keep the first insertion so
                // every caller sees the same allocation.
                let entry = cache
                    .entry(name.to_string())
                    .or_insert_with(|| tree.clone());
                return Ok(entry.clone());
            }
        }

        Err(DocnavError::TreeNotFound(name.to_string()))
    }

    /// Children of `node`, following a cross-tree reference if present.
    ///
    /// Inline children come back unchanged, a reference loads the named
    /// tree and yields its roots, a leaf yields nothing. Dangling
    /// references propagate `TreeNotFound`.
    pub fn resolve_children(&self, node: &NavNode) -> Result<Vec<NavNode>> {
        match node.referenced_tree() {
            Some(name) => Ok(self.load(name)?.roots().to_vec()),
            None => Ok(node.children().to_vec()),
        }
    }

    /// Whether `name` currently resolves through any source.
    pub fn contains(&self, name: &str) -> bool {
        self.load(name).is_ok()
    }

    /// Names of trees already materialized in the cache.
    pub fn cached_names(&self) -> Vec<String> {
        self.cache.read().unwrap().keys().cloned().collect()
    }
}
