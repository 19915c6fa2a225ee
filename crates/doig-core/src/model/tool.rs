use serde::Serialize;

/// ツールの有効/無効
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Enabled,
    Disabled,
}

impl ToolStatus {
    /// `status` の値を解釈する。`disabled` 以外は全て有効扱い
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("disabled") => Self::Disabled,
            _ => Self::Enabled,
        }
    }
}

/// イメージに組み込むツール1件分の定義
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub name: String,
    /// Dockerfile の RUN に展開されるシェルコマンド
    pub command: String,
    pub category: String,
    pub comment: Option<String>,
    pub status: ToolStatus,
}

impl Tool {
    pub fn is_enabled(&self) -> bool {
        self.status == ToolStatus::Enabled
    }

    /// 一覧表示用のラベル（コメントがあれば `name: comment`）
    pub fn label(&self) -> String {
        match self.comment.as_deref() {
            Some(comment) if !comment.is_empty() => format!("{}: {}", self.name, comment),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(comment: Option<&str>) -> Tool {
        Tool {
            name: "nmap".to_string(),
            command: "apt-get install -y nmap".to_string(),
            category: "recon".to_string(),
            comment: comment.map(str::to_string),
            status: ToolStatus::Enabled,
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(ToolStatus::parse(None), ToolStatus::Enabled);
        assert_eq!(ToolStatus::parse(Some("enabled")), ToolStatus::Enabled);
        assert_eq!(ToolStatus::parse(Some("disabled")), ToolStatus::Disabled);
        assert_eq!(ToolStatus::parse(Some(" Disabled ")), ToolStatus::Disabled);
        assert_eq!(ToolStatus::parse(Some("whatever")), ToolStatus::Enabled);
    }

    #[test]
    fn test_label() {
        assert_eq!(tool(None).label(), "nmap");
        assert_eq!(tool(Some("")).label(), "nmap");
        assert_eq!(
            tool(Some("needs root to scan")).label(),
            "nmap: needs root to scan"
        );
    }
}
