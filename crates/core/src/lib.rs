pub mod error;
pub mod facade;
pub mod logging;
pub mod model;
pub mod pageindex;
pub mod registry;
pub mod source;

pub use error::{DocnavError, Result};
pub use facade::DocIndex;
pub use model::{NavNode, NavTree, Walk};
pub use pageindex::PageIndex;
pub use registry::{MemorySource, TreeRegistry, TreeSource};
pub use source::ScriptDirSource;
