//! doig イメージビルド
//!
//! 生成したDockerfileからビルドコンテキストを作成し、
//! Docker Engine API を使ってイメージをビルドします。

pub mod builder;
pub mod context;
pub mod error;

pub use builder::{ImageBuilder, normalize_tag};
pub use context::{ContextBuilder, DOCKERFILE_NAME, MANIFEST_NAME};
pub use error::{BuildError, Result};
