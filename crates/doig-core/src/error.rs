use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(
        "ツールカタログが見つかりません: {0}\nヒント: doig update でカタログを取得してください"
    )]
    CatalogNotFound(PathBuf),

    #[error("ツール定義の読み込みエラー: {path}\n理由: {message}")]
    InvalidToolFile { path: PathBuf, message: String },

    #[error("ツール定義に必須項目 '{field}' がありません: {path}")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("{0} is not in the available tools")]
    UnknownTool(String),

    #[error("テンプレートエラー: {0}")]
    Template(String),

    #[error("ファイル検索エラー: {0}")]
    Glob(String),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
