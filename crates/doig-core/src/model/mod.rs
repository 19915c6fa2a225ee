//! モデル定義
//!
//! ツール定義、カタログ、選択済みツールセットを定義します。

mod catalog;
mod tool;
mod toolset;

pub use catalog::*;
pub use tool::*;
pub use toolset::*;
