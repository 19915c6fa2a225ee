use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Docker connection error: {0}")]
    DockerConnection(#[from] bollard::errors::Error),

    #[error("Build failed: {0}")]
    BuildFailed(String),

    #[error("Invalid build configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// ユーザー向けの分かりやすいエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            BuildError::DockerConnection(e) => {
                format!(
                    "Dockerに接続できません: {}\n\
                     \n\
                     解決方法:\n\
                     1. Dockerデーモンが起動しているか確認してください\n\
                     2. リモートのDockerを使う場合は DOCKER_HOST を設定してください",
                    e
                )
            }
            BuildError::BuildFailed(msg) => {
                format!(
                    "ビルドに失敗しました: {}\n\
                     \n\
                     doig dockerfile で生成されるDockerfileの内容を確認してください。",
                    msg
                )
            }
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
