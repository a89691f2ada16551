//! Script-directory backed tree source.

use std::path::{Path, PathBuf};

use docnav_ingest::ScriptScanner;
use tracing::debug;

use crate::error::Result;
use crate::model::NavTree;
use crate::registry::TreeSource;

/// Tree source over a directory of generated navigation scripts.
///
/// A tree named `annotated_dup` is expected at `<root>/annotated_dup.js`,
/// declared as `var annotated_dup = [...];` the way the generator writes
/// it. Files are read lazily, one per cross-tree reference, on first load.
pub struct ScriptDirSource {
    scanner: ScriptScanner,
}

impl ScriptDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            scanner: ScriptScanner::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        self.scanner.root()
    }

    /// Tree names available on disk, in lexical order.
    pub fn available(&self) -> Vec<String> {
        self.scanner.scan().into_iter().map(|e| e.name).collect()
    }
}

impl TreeSource for ScriptDirSource {
    fn load(&self, name: &str) -> Result<Option<NavTree>> {
        match self.scanner.read_declaration(name)? {
            Some(decl) => {
                debug!("decoding tree {name} from {}", self.root().display());
                Ok(Some(NavTree::from_value(&decl.value)?))
            }
            None => Ok(None),
        }
    }
}
