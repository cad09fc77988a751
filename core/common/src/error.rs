//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits に合わせる。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Environment error: {0}")]
    Env(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// 入力値の検証エラー（必須項目の欠落など）
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) | Self::Validation(_) => 65,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Env(_) => 78,
        }
    }

    /// 使い方の誤りか（main で usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
