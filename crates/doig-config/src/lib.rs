pub mod error;

pub use error::*;

use std::path::{Path, PathBuf};

/// アプリケーションディレクトリを上書きする環境変数
pub const APP_DIR_ENV: &str = "DOIG_PATH";

/// カタログ取得元URLを上書きする環境変数
pub const TOOLS_URL_ENV: &str = "DOIG_TOOLS_URL";

/// デフォルトのカタログアーカイブ
pub const DEFAULT_TOOLS_URL: &str =
    "https://github.com/doig-project/doig-tools/archive/refs/heads/master.zip";

/// ツールカタログのディレクトリ名
pub const TOOLS_DIR_NAME: &str = "tools";

const APP_DIR_NAME: &str = ".doig";
const TEMPLATE_FILE_NAME: &str = "Dockerfile.template";

/// アプリケーションディレクトリ配下のパス
///
/// ```text
/// ~/.doig/
/// ├── Dockerfile.template
/// └── tools/
///     ├── nmap.ini
///     └── ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    root: PathBuf,
}

impl AppPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 環境変数とホームディレクトリからアプリケーションディレクトリを決定
    pub fn discover() -> Result<Self> {
        resolve_app_dir().map(Self::new)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// ツール定義 (.ini) を格納するディレクトリ
    pub fn tools_dir(&self) -> PathBuf {
        self.root.join(TOOLS_DIR_NAME)
    }

    /// Dockerfileテンプレートのパス
    pub fn template_path(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE_NAME)
    }

    /// カタログが展開済みかどうか
    pub fn is_initialized(&self) -> bool {
        self.tools_dir().is_dir()
    }

    /// ルートディレクトリを作成
    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            tracing::debug!(root = %self.root.display(), "Creating application directory");
            std::fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

/// アプリケーションディレクトリを取得
///
/// 以下の優先順位:
/// 1. 環境変数 DOIG_PATH
/// 2. ~/.doig
pub fn resolve_app_dir() -> Result<PathBuf> {
    if let Some(path) = non_empty_env(APP_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }

    dirs::home_dir()
        .map(|home| home.join(APP_DIR_NAME))
        .ok_or(ConfigError::HomeDirNotFound)
}

/// カタログアーカイブのURLを取得（DOIG_TOOLS_URL > デフォルト）
pub fn tools_url() -> String {
    non_empty_env(TOOLS_URL_ENV).unwrap_or_else(|| DEFAULT_TOOLS_URL.to_string())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
