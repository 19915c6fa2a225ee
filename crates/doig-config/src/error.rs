use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "ホームディレクトリが見つかりません。\n\
        DOIG_PATH 環境変数または --app-dir でアプリケーションディレクトリを指定してください"
    )]
    HomeDirNotFound,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
