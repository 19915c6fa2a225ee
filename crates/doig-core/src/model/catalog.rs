use super::Tool;
use std::collections::{BTreeMap, BTreeSet};

/// 利用可能なツールの一覧（名前順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tools: BTreeMap<String, Tool>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// ツールを登録する。同名のツールが既にあれば置き換えて古い方を返す
    pub fn insert(&mut self, tool: Tool) -> Option<Tool> {
        self.tools.insert(tool.name.clone(), tool)
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// カテゴリ一覧（重複なし、ソート済み）
    pub fn categories(&self) -> Vec<&str> {
        self.tools
            .values()
            .map(|t| t.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<Tool> for Catalog {
    fn from_iter<I: IntoIterator<Item = Tool>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for tool in iter {
            catalog.insert(tool);
        }
        catalog
    }
}
