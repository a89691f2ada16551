//! Extraction of array declarations from generated navigation scripts.
//!
//! The documentation generator ships its navigation data as JavaScript,
//! not JSON: every file declares one or more `var NAME = [...];` globals,
//! mixed with scalar declarations (sync messages, UI flags) that carry no
//! tree data. The array initializers themselves are JSON-compatible, so
//! once the literal is located it parses with `serde_json` directly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{IngestError, IngestResult};

/// A `var NAME = [...];` declaration lifted out of a script file.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptDecl {
    pub name: String,
    pub value: Value,
}

static VAR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"var\s+([A-Za-z_][A-Za-z0-9_]*)\s*=").unwrap());

/// Pull every array declaration out of `text`, in file order.
///
/// Declarations whose initializer is not an array literal are skipped.
/// An array that never closes, or one whose payload is not valid JSON,
/// fails the whole extraction; the caller must supply a well-formed file.
pub fn extract_declarations(text: &str) -> IngestResult<Vec<ScriptDecl>> {
    let mut decls = Vec::new();
    let mut pos = 0;

    // Scan sequentially and jump over each consumed literal, so that
    // `var X =` appearing inside a label string is never treated as a
    // declaration.
    while let Some(caps) = VAR_DECL.captures(&text[pos..]) {
        let matched = caps.get(0).unwrap();
        let name = caps[1].to_string();
        let after = pos + matched.end();

        let rest = text[after..].trim_start();
        if !rest.starts_with('[') {
            trace!("skipping non-array declaration {name}");
            pos = after;
            continue;
        }

        let literal = array_literal(rest).ok_or_else(|| {
            IngestError::Script(format!("unterminated array in declaration {name}"))
        })?;
        let value: Value = serde_json::from_str(literal)?;

        let skipped_ws = text[after..].len() - rest.len();
        pos = after + skipped_ws + literal.len();
        decls.push(ScriptDecl { name, value });
    }

    debug!("extracted {} array declaration(s)", decls.len());
    Ok(decls)
}

/// First array declaration named `name`, if the file contains one.
pub fn find_declaration(text: &str, name: &str) -> IngestResult<Option<ScriptDecl>> {
    Ok(extract_declarations(text)?
        .into_iter()
        .find(|d| d.name == name))
}

/// Longest prefix of `text` forming a balanced `[...]` literal.
///
/// Bracket counting ignores brackets inside double-quoted strings, and
/// honors backslash escapes inside them.
fn array_literal(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
