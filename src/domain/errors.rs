//! # Domain Errors
//!
//! PagerDuty API 呼び出しのエラー分類

use thiserror::Error;

/// API 呼び出しエラー
///
/// どのエラーもリトライせず、その実行の終了理由になる
#[derive(Debug, Error)]
pub enum ApiError {
    /// トークンが無効・未設定
    #[error("PagerDuty rejected the API token ({status}): {body}")]
    Auth { status: u16, body: String },

    /// その他の非2xxレスポンス（レート制限を含む）
    #[error("PagerDuty returned {status}: {body}")]
    Status { status: u16, body: String },

    /// ネットワークエラー
    #[error("request to PagerDuty failed: {0}")]
    Transport(String),

    /// 想定外のレスポンス形式
    #[error("malformed PagerDuty response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// HTTP ステータスからエラーを分類
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth { status, body },
            _ => ApiError::Status { status, body },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}
