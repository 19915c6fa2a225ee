//! ツールセット解決
//!
//! 指定されたツール名・カテゴリ名から、イメージに組み込むツールを決定します。

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Toolset};
use tracing::{debug, warn};

/// 全ツールを選択する疑似カテゴリ
pub const ALL_CATEGORY: &str = "all";

/// カテゴリ → ツール名の順に解決する
///
/// - カテゴリ `all` は全ツールに一致
/// - 一致するツールがないカテゴリは警告のみ
/// - 未知のツール名はエラー
pub fn resolve_toolset(
    catalog: &Catalog,
    tools: &[String],
    categories: &[String],
) -> Result<Toolset> {
    let mut toolset = Toolset::new();

    for category in categories {
        let mut matched = 0;
        for tool in catalog.tools() {
            if category == ALL_CATEGORY || *category == tool.category {
                matched += 1;
                if toolset.add(tool) {
                    debug!(tool = %tool.name, category = %category, "Adding tool");
                }
            }
        }
        if matched == 0 {
            warn!(category = %category, "No tools found for category");
        }
    }

    for name in tools {
        // カテゴリ指定で追加済みのものはスキップ
        if toolset.contains(name) {
            debug!(tool = %name, "Already selected");
            continue;
        }
        let tool = catalog
            .get(name)
            .ok_or_else(|| CatalogError::UnknownTool(name.clone()))?;
        toolset.add(tool);
        debug!(tool = %tool.name, "Adding tool");
    }

    Ok(toolset)
}
