//! One-stop view over a generated documentation directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use docnav_ingest::script;
use tracing::info;

use crate::error::{DocnavError, Result};
use crate::model::{NavNode, NavTree};
use crate::pageindex::PageIndex;
use crate::registry::TreeRegistry;
use crate::source::ScriptDirSource;

/// Globals the generator writes into the entry script.
const MAIN_TREE_VAR: &str = "NAVTREE";
const PAGE_INDEX_VAR: &str = "NAVTREEINDEX";
const MAIN_SCRIPT: &str = "navtreedata.js";

/// The assembled navigation index of one documentation directory: the
/// main tree, the flat page index, and a registry that resolves
/// cross-tree references lazily against the same directory.
///
/// Everything is loaded read-only; after `open` the index can be shared
/// across threads freely.
#[derive(Debug)]
pub struct DocIndex {
    root: PathBuf,
    main: Arc<NavTree>,
    pages: PageIndex,
    registry: TreeRegistry,
}

impl DocIndex {
    /// Open the index rooted at `navtreedata.js` under `root`.
    ///
    /// The entry script must declare the main tree; the page index is
    /// optional (older generators ship without the paging companion).
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let text = fs::read_to_string(root.join(MAIN_SCRIPT))?;
        let decls = script::extract_declarations(&text)?;

        let main = decls
            .iter()
            .find(|d| d.name == MAIN_TREE_VAR)
            .ok_or_else(|| DocnavError::TreeNotFound(MAIN_TREE_VAR.to_string()))?;
        let main = Arc::new(NavTree::from_value(&main.value)?);

        let pages = match decls.iter().find(|d| d.name == PAGE_INDEX_VAR) {
            Some(decl) => PageIndex::from_value(&decl.value)?,
            None => PageIndex::default(),
        };

        let registry =
            TreeRegistry::new().with_source(Box::new(ScriptDirSource::new(&root)));

        info!(
            "opened documentation index at {}: {} root node(s), {} page(s)",
            root.display(),
            main.roots().len(),
            pages.len()
        );

        Ok(Self {
            root,
            main,
            pages,
            registry,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn main_tree(&self) -> &Arc<NavTree> {
        &self.main
    }

    pub fn pages(&self) -> &PageIndex {
        &self.pages
    }

    pub fn registry(&self) -> &TreeRegistry {
        &self.registry
    }

    /// Load a named tree through the registry.
    pub fn load(&self, name: &str) -> Result<Arc<NavTree>> {
        self.registry.load(name)
    }

    /// Children of `node`, resolving a cross-tree reference if present.
    pub fn resolve_children(&self, node: &NavNode) -> Result<Vec<NavNode>> {
        self.registry.resolve_children(node)
    }
}
