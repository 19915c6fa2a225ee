//! カタログローダー
//!
//! ツールディレクトリ配下の `.ini` ファイルを全て読み込み、カタログを構築します。
//!
//! ```ini
//! [default]
//! name = nmap
//! command = apt-get install -y nmap
//! category = recon
//! comment = Network scanner
//! status = enabled
//! ```
//!
//! `[default]` セクションを省略したファイルも受け付けます。
//! セクション名・キー名の大文字小文字は区別しません（`[DEFAULT]`, `Command = ...`）。

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Tool, ToolStatus};
use config::{Config, File, FileFormat, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

const TOOL_SECTION: &str = "default";

/// .ini ファイルの生の内容
#[derive(Debug, Default)]
struct ToolFields {
    name: Option<String>,
    command: Option<String>,
    category: Option<String>,
    comment: Option<String>,
    status: Option<String>,
}

impl ToolFields {
    /// キーを小文字に揃えた上で各項目を取り出す
    fn from_entries(entries: HashMap<String, Value>) -> Self {
        let mut values: HashMap<String, String> = entries
            .into_iter()
            .filter_map(|(key, value)| {
                // 文字列にならない値（他のセクションなど）は無視
                value.into_string().ok().map(|v| (key.to_lowercase(), v))
            })
            .collect();

        Self {
            name: values.remove("name"),
            command: values.remove("command"),
            category: values.remove("category"),
            comment: values.remove("comment"),
            status: values.remove("status"),
        }
    }
}

/// ツールディレクトリからカタログを読み込む
///
/// 無効化されたツール (`status = disabled`) は除外されます。
/// 同名のツールが複数ある場合はパス順で後のファイルが優先されます。
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    if !dir.is_dir() {
        return Err(CatalogError::CatalogNotFound(dir.to_path_buf()));
    }

    let mut catalog = Catalog::new();
    let mut disabled = 0;

    for path in find_tool_files(dir)? {
        let tool = load_tool_file(&path)?;
        if !tool.is_enabled() {
            debug!(tool = %tool.name, "Skipping disabled tool");
            disabled += 1;
            continue;
        }

        debug!(tool = %tool.name, category = %tool.category, "Loaded tool");
        if let Some(previous) = catalog.insert(tool) {
            warn!(
                tool = %previous.name,
                file = %path.display(),
                "Duplicate tool name, later definition wins"
            );
        }
    }

    info!(
        tools = catalog.len(),
        disabled,
        "Tool catalog loaded"
    );
    Ok(catalog)
}

/// ツール定義ファイルを1件読み込む
pub fn load_tool_file(path: &Path) -> Result<Tool> {
    let settings = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()
        .map_err(|e| invalid_file(path, e))?;

    let root = settings
        .try_deserialize::<HashMap<String, Value>>()
        .map_err(|e| invalid_file(path, e))?;
    let entries = tool_entries(root).map_err(|e| invalid_file(path, e))?;
    let fields = ToolFields::from_entries(entries);

    let name = non_blank(fields.name).unwrap_or_else(|| tool_name_from_path(path));
    let command = non_blank(fields.command).ok_or_else(|| CatalogError::MissingField {
        path: path.to_path_buf(),
        field: "command",
    })?;
    let category = non_blank(fields.category).ok_or_else(|| CatalogError::MissingField {
        path: path.to_path_buf(),
        field: "category",
    })?;

    Ok(Tool {
        name,
        command,
        category,
        comment: non_blank(fields.comment),
        status: ToolStatus::parse(fields.status.as_deref()),
    })
}

/// `[default]` セクションの内容。セクションがなければトップレベルのキー
fn tool_entries(
    root: HashMap<String, Value>,
) -> std::result::Result<HashMap<String, Value>, config::ConfigError> {
    let mut top_level = HashMap::new();
    for (key, value) in root {
        if key.eq_ignore_ascii_case(TOOL_SECTION) {
            return value.into_table();
        }
        top_level.insert(key, value);
    }
    Ok(top_level)
}

/// 拡張子を除いたファイル名（`test.ext.ini` → `test.ext`）
fn tool_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn find_tool_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/*.ini",
        glob::Pattern::escape(&dir.to_string_lossy())
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).map_err(|e| CatalogError::Glob(e.to_string()))? {
        let path = entry.map_err(|e| CatalogError::Glob(e.to_string()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    debug!(count = files.len(), "Found tool files");
    Ok(files)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn invalid_file(path: &Path, e: config::ConfigError) -> CatalogError {
    CatalogError::InvalidToolFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
