//! Dockerfile テンプレート展開
//!
//! Teraを使用して、選択されたツールのコマンドをDockerfileに展開します。
//!
//! テンプレートで利用できる変数:
//! - `commands`: コマンド文字列のリスト
//! - `tools`: ツール定義のリスト (`name`, `command`, `category`, `comment`)

use crate::error::{CatalogError, Result};
use crate::model::{Tool, Toolset};
use std::path::Path;
use tera::{Context, Tera};
use tracing::{debug, info};

const TEMPLATE_NAME: &str = "Dockerfile";

/// テンプレートファイルがない場合に使用するDockerfile
pub const DEFAULT_TEMPLATE: &str = "\
FROM debian:bookworm-slim

ENV DEBIAN_FRONTEND=noninteractive
RUN apt-get update

{% for command in commands %}RUN {{ command }}
{% endfor %}
WORKDIR /root
";

/// ビルド時にツール一覧をイメージへコピーする命令
const COPY_MANIFEST: &str = "\nCOPY tools.txt .";

pub struct DockerfileRenderer {
    tera: Tera,
}

impl DockerfileRenderer {
    /// テンプレート文字列から作成
    pub fn new(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template)
            .map_err(|e| CatalogError::Template(extract_tera_error_detail(&e)))?;
        Ok(Self { tera })
    }

    /// 組み込みテンプレートを使用
    pub fn builtin() -> Result<Self> {
        Self::new(DEFAULT_TEMPLATE)
    }

    /// テンプレートファイルを読み込む
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(template = %path.display(), "Loading Dockerfile template");
        let content = std::fs::read_to_string(path)?;
        Self::new(&content)
    }

    /// テンプレートファイルがあればそれを、なければ組み込みテンプレートを使用
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::from_path(path)
        } else {
            info!(
                template = %path.display(),
                "Template file not found, using built-in template"
            );
            Self::builtin()
        }
    }

    /// Dockerfileを生成
    pub fn render(&self, toolset: &Toolset) -> Result<String> {
        let mut context = Context::new();
        context.insert("commands", &toolset.commands());
        context.insert("tools", &toolset.tools().collect::<Vec<&Tool>>());

        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| CatalogError::Template(extract_tera_error_detail(&e)))
    }

    /// イメージビルド用のDockerfileを生成
    ///
    /// ツールが選択されている場合は tools.txt をイメージにコピーする命令を追加します。
    pub fn render_for_build(&self, toolset: &Toolset) -> Result<String> {
        let mut dockerfile = self.render(toolset)?;
        if !toolset.is_empty() {
            dockerfile.push_str(COPY_MANIFEST);
        }
        Ok(dockerfile)
    }
}

/// Teraのエラーチェーンを1つのメッセージにまとめる
fn extract_tera_error_detail(e: &tera::Error) -> String {
    use std::error::Error;

    let mut details = vec![e.to_string()];
    let mut source = e.source();
    while let Some(err) = source {
        details.push(err.to_string());
        source = err.source();
    }
    details.join(" | ")
}
