//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - 終了コードを決める
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **resolver**: 引数と設定の解決
//! - **exit**: 終了コード
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod exit;
pub mod resolver;
pub mod workflow;

pub use cli::{ExportArgs, OnCallArgs, TeamsArgs};
pub use exit::ExitStatus;
pub use workflow::PagerDutyWorkflow;
