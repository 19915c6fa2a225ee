use super::Tool;
use std::collections::BTreeMap;

/// イメージに組み込むツールの集合（重複なし、名前順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolset {
    tools: BTreeMap<String, Tool>,
}

impl Toolset {
    pub fn new() -> Self {
        Self::default()
    }

    /// ツールを追加する。既に含まれていれば false
    pub fn add(&mut self, tool: &Tool) -> bool {
        if self.tools.contains_key(&tool.name) {
            return false;
        }
        self.tools.insert(tool.name.clone(), tool.clone());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
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

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn commands(&self) -> Vec<&str> {
        self.tools.values().map(|t| t.command.as_str()).collect()
    }

    /// イメージ内に配置する tools.txt の内容（1行1ツール名）
    pub fn manifest(&self) -> String {
        self.tools.keys().map(|name| format!("{}\n", name)).collect()
    }
}
