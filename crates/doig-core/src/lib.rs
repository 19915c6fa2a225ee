//! doig コア
//!
//! ツールカタログの読み込み、ツールセットの解決、Dockerfileの生成を提供します。

pub mod error;
pub mod loader;
pub mod model;
pub mod resolver;
pub mod template;

pub use error::{CatalogError, Result};
pub use loader::{load_catalog, load_tool_file};
pub use model::{Catalog, Tool, ToolStatus, Toolset};
pub use resolver::{ALL_CATEGORY, resolve_toolset};
pub use template::{DEFAULT_TEMPLATE, DockerfileRenderer};
