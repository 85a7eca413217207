//! # Exit Policy
//!
//! 実行結果をプロセス終了コードに対応付ける

use anyhow::Result;
use log::debug;
use std::process::ExitCode;

use crate::domain::entities::user::OnCallStatus;

/// 終了状態
///
/// 1回の実行で必ずどれか1つになる
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// 正常終了（オンコール中を含む）
    Success,
    /// オンコールではない（エラーではない）
    NotOnCall,
    /// API・認証・入力エラー
    Failed,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::NotOnCall => 1,
            ExitStatus::Failed => 2,
        }
    }

    pub fn from_on_call(status: &OnCallStatus) -> Self {
        if status.is_on_call() {
            ExitStatus::Success
        } else {
            ExitStatus::NotOnCall
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// 結果から終了状態を決める（エラーは標準エラー出力に書く）
pub fn resolve(result: Result<ExitStatus>) -> ExitStatus {
    match result {
        Ok(status) => status,
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("ERROR: {:#}", e);
            ExitStatus::Failed
        }
    }
}

/// `main` の戻り値
pub fn finish(result: Result<ExitStatus>) -> ExitCode {
    resolve(result).into()
}
