//! Discovery of navigation scripts under a generated documentation root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{IngestError, IngestResult};
use crate::script::{self, ScriptDecl};

/// A script file that may hold a navigation tree declaration.
///
/// The generator names each file after the global it declares, so the
/// file stem doubles as the tree name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Finds and reads navigation scripts in a documentation directory.
pub struct ScriptScanner {
    root: PathBuf,
}

impl ScriptScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover candidate tree scripts, in lexical order.
    ///
    /// Generated navigation scripts all sit flat in the output directory,
    /// so the walk is capped at one level and never follows symlinks.
    pub fn scan(&self) -> Vec<ScriptEntry> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("js") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            entries.push(ScriptEntry {
                name: stem.to_string(),
                path: path.to_path_buf(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(
            "discovered {} script file(s) under {}",
            entries.len(),
            self.root.display()
        );
        entries
    }

    /// Read `<root>/<name>.js` and pull out the declaration named after
    /// the file. `Ok(None)` when no such file exists; a file that exists
    /// but declares no matching global is an error.
    pub fn read_declaration(&self, name: &str) -> IngestResult<Option<ScriptDecl>> {
        // Tree names are generator-emitted identifiers; anything else
        // cannot name a script file and must not escape the root.
        if !is_identifier(name) {
            return Ok(None);
        }

        let path = self.root.join(format!("{name}.js"));
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(IngestError::Io(e)),
        };

        match script::find_declaration(&text, name)? {
            Some(decl) => Ok(Some(decl)),
            None => Err(IngestError::Script(format!(
                "{} does not declare a variable named {name}",
                path.display()
            ))),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(format!("{name}.js")), body).unwrap();
    }

    #[test]
    fn test_scan_lists_js_files_sorted() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "hierarchy", "var hierarchy = [];");
        write_script(temp.path(), "annotated_dup", "var annotated_dup = [];");
        fs::write(temp.path().join("index.html"), "<html></html>").unwrap();

        let scanner = ScriptScanner::new(temp.path());
        let entries = scanner.scan();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["annotated_dup", "hierarchy"]);
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("search");
        fs::create_dir(&sub).unwrap();
        write_script(&sub, "all_0", "var all_0 = [];");
        write_script(temp.path(), "files", "var files = [];");

        let scanner = ScriptScanner::new(temp.path());
        let names: Vec<_> = scanner.scan().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["files"]);
    }

    #[test]
    fn test_read_declaration() {
        let temp = TempDir::new().unwrap();
        write_script(
            temp.path(),
            "files",
            "var files =\n[\n  [ \"src\", null, null ]\n];\n",
        );

        let scanner = ScriptScanner::new(temp.path());
        let decl = scanner.read_declaration("files").unwrap().unwrap();
        assert_eq!(decl.name, "files");
        assert!(decl.value.is_array());
    }

    #[test]
    fn test_read_declaration_missing_file() {
        let temp = TempDir::new().unwrap();
        let scanner = ScriptScanner::new(temp.path());
        assert!(scanner.read_declaration("nope").unwrap().is_none());
    }

    #[test]
    fn test_read_declaration_wrong_global() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "files", "var other = [];");

        let scanner = ScriptScanner::new(temp.path());
        let err = scanner.read_declaration("files").unwrap_err();
        assert!(matches!(err, IngestError::Script(_)));
    }

    #[test]
    fn test_read_declaration_rejects_path_shapes() {
        let temp = TempDir::new().unwrap();
        let scanner = ScriptScanner::new(temp.path());
        assert!(scanner.read_declaration("../etc/passwd").unwrap().is_none());
        assert!(scanner.read_declaration("").unwrap().is_none());
    }
}
