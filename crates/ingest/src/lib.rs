pub mod error;
pub mod scanner;
pub mod script;

pub use error::{IngestError, IngestResult};
pub use scanner::{ScriptEntry, ScriptScanner};
pub use script::{ScriptDecl, extract_declarations, find_declaration};
